//! Solve Problem use case
//!
//! Orchestrates one full council run: fan the problem out to every
//! configured agent concurrently, wait for all of them to settle, then
//! hand the ordered reports to the summarizer.

use crate::config::SolveParams;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::{
    AgentFailure, AgentOutcome, AgentReport, ModelId, Problem, PromptTemplate, SolveReport,
    parse_solution, summarize,
};
use futures::future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can abort a council run before any network activity
///
/// Per-agent failures are never here; they are recorded inside the
/// [`SolveReport`] instead.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("No agents configured")]
    NoAgents,
}

/// Input for the SolveProblem use case
#[derive(Debug, Clone)]
pub struct SolveInput {
    /// The problem to solve
    pub problem: Problem,
    /// The agents to dispatch to, in presentation order
    pub agents: Vec<ModelId>,
    /// Run parameters (deadline, consensus policy)
    pub params: SolveParams,
}

impl SolveInput {
    pub fn new(problem: impl Into<Problem>, agents: Vec<ModelId>) -> Self {
        Self {
            problem: problem.into(),
            agents,
            params: SolveParams::default(),
        }
    }

    pub fn with_params(mut self, params: SolveParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for running the council on one problem
pub struct SolveProblemUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: CompletionGateway + 'static> SolveProblemUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: SolveInput) -> Result<SolveReport, SolveError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SolveInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<SolveReport, SolveError> {
        if input.agents.is_empty() {
            return Err(SolveError::NoAgents);
        }

        info!(
            "Dispatching problem to {} agent(s)",
            input.agents.len()
        );
        progress.on_dispatch_start(input.agents.len());

        let system = PromptTemplate::solve_system();
        let prompt = PromptTemplate::solve_prompt(input.problem.content());
        let deadline = input.params.timeout;

        // join_all keeps results in input order, so the reports line up
        // with the configured agents no matter which call finishes first.
        let calls = input.agents.iter().cloned().map(|agent| {
            let gateway = Arc::clone(&self.gateway);
            let prompt = prompt.clone();
            async move {
                let outcome = Self::solve_one(&*gateway, &agent, system, &prompt, deadline).await;
                match &outcome {
                    AgentOutcome::Solved(_) => {
                        info!("Agent {} produced a solution", agent);
                        progress.on_agent_complete(&agent, true);
                    }
                    AgentOutcome::Failed(failure) => {
                        warn!("Agent {} failed: {}", agent, failure);
                        progress.on_agent_complete(&agent, false);
                    }
                }
                AgentReport { agent, outcome }
            }
        });
        let reports = future::join_all(calls).await;

        progress.on_dispatch_complete();

        let summary = summarize(&reports, &input.params.policy);
        Ok(SolveReport::new(input.problem.content(), reports, summary))
    }

    /// Run one agent: a single completion call plus strict parsing.
    ///
    /// Every failure becomes an [`AgentOutcome::Failed`]; nothing raised
    /// here can abort a sibling agent.
    async fn solve_one(
        gateway: &G,
        agent: &ModelId,
        system: &str,
        prompt: &str,
        deadline: Duration,
    ) -> AgentOutcome {
        let reply = match tokio::time::timeout(deadline, gateway.complete(agent, system, prompt))
            .await
        {
            Err(_) => {
                return AgentOutcome::Failed(AgentFailure::timeout(format!(
                    "no reply within {}s",
                    deadline.as_secs()
                )));
            }
            Ok(Err(GatewayError::Timeout)) => {
                return AgentOutcome::Failed(AgentFailure::timeout("request timed out"));
            }
            Ok(Err(e)) => {
                return AgentOutcome::Failed(AgentFailure::communication(e.to_string()));
            }
            Ok(Ok(reply)) => reply,
        };

        match parse_solution(&reply) {
            Ok(solution) => AgentOutcome::Solved(solution),
            Err(e) => AgentOutcome::Failed(AgentFailure::malformed(e.to_string())),
        }
    }
}
