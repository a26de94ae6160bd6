//! Progress notification port
//!
//! Defines the interface for reporting progress while the council works.

use council_domain::ModelId;

/// Callback for progress updates during a solve
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console bars, plain logging, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called once when the problem is dispatched to the agents
    fn on_dispatch_start(&self, total_agents: usize);

    /// Called as each agent settles, in completion order
    fn on_agent_complete(&self, agent: &ModelId, success: bool);

    /// Called once after every agent has settled
    fn on_dispatch_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _total_agents: usize) {}
    fn on_agent_complete(&self, _agent: &ModelId, _success: bool) {}
    fn on_dispatch_complete(&self) {}
}
