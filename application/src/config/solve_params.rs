//! Solve parameters: per-run control knobs.
//!
//! [`SolveParams`] groups the static parameters that control one council
//! run: the overall deadline and the consensus policy. These are
//! application-layer concerns injected by the caller, never ambient state.

use council_domain::ConsensusPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for one solve run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveParams {
    /// Overall deadline for the dispatch phase. Agents that have not
    /// answered when it elapses are recorded as timed out.
    pub timeout: Duration,
    /// Thresholds used by the summarizer.
    pub policy: ConsensusPolicy,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            policy: ConsensusPolicy::default(),
        }
    }
}

impl SolveParams {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: ConsensusPolicy) -> Self {
        self.policy = policy;
        self
    }
}
