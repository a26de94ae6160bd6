//! Solution value objects - immutable per-agent results.
//!
//! These types represent what each agent hands back to the orchestrator:
//! - [`AgentSolution`] - A successfully parsed structured solution
//! - [`AgentFailure`] - Why an agent produced no usable solution
//! - [`AgentOutcome`] - Tagged union of the two
//! - [`AgentReport`] - One agent's identity paired with its outcome

use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// Structured solution produced by one agent
///
/// Built exclusively by the reply parser; immutable after creation and
/// owned by the orchestrator once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSolution {
    /// The agent's restatement of what the problem asks
    pub understanding: String,
    /// Ordered solution steps, list markers stripped
    pub steps: Vec<String>,
    /// The final answer line, verbatim
    pub final_answer: String,
}

impl AgentSolution {
    pub fn new(
        understanding: impl Into<String>,
        steps: Vec<String>,
        final_answer: impl Into<String>,
    ) -> Self {
        Self {
            understanding: understanding.into(),
            steps,
            final_answer: final_answer.into(),
        }
    }

    /// Number of non-empty solution steps
    ///
    /// Used by the summarizer as a detail measure when breaking ties.
    pub fn detail(&self) -> usize {
        self.steps.iter().filter(|s| !s.trim().is_empty()).count()
    }
}

/// Category of a per-agent failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network error, non-2xx status, or empty reply from the service
    Communication,
    /// The reply arrived but did not follow the section contract
    MalformedReply,
    /// The solve deadline elapsed before the agent answered
    Timeout,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::Communication => "communication",
            FailureKind::MalformedReply => "malformed reply",
            FailureKind::Timeout => "timeout",
        };
        write!(f, "{}", s)
    }
}

/// Why an agent produced no usable solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFailure {
    pub kind: FailureKind,
    /// Human-readable cause, safe to show to the user
    pub cause: String,
}

impl AgentFailure {
    pub fn new(kind: FailureKind, cause: impl Into<String>) -> Self {
        Self {
            kind,
            cause: cause.into(),
        }
    }

    pub fn communication(cause: impl Into<String>) -> Self {
        Self::new(FailureKind::Communication, cause)
    }

    pub fn malformed(cause: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedReply, cause)
    }

    pub fn timeout(cause: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, cause)
    }
}

impl std::fmt::Display for AgentFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.cause)
    }
}

/// Outcome of one agent's attempt at the problem
///
/// A failure here is data, not an error: the orchestrator records it and
/// carries on with the other agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum AgentOutcome {
    Solved(AgentSolution),
    Failed(AgentFailure),
}

impl AgentOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, AgentOutcome::Solved(_))
    }

    /// The solution, if this outcome holds one
    pub fn solution(&self) -> Option<&AgentSolution> {
        match self {
            AgentOutcome::Solved(s) => Some(s),
            AgentOutcome::Failed(_) => None,
        }
    }

    /// The failure, if this outcome holds one
    pub fn failure(&self) -> Option<&AgentFailure> {
        match self {
            AgentOutcome::Solved(_) => None,
            AgentOutcome::Failed(f) => Some(f),
        }
    }
}

/// One agent's identity paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReport {
    /// The model that attempted the problem
    pub agent: ModelId,
    #[serde(flatten)]
    pub outcome: AgentOutcome,
}

impl AgentReport {
    pub fn solved(agent: ModelId, solution: AgentSolution) -> Self {
        Self {
            agent,
            outcome: AgentOutcome::Solved(solution),
        }
    }

    pub fn failed(agent: ModelId, failure: AgentFailure) -> Self {
        Self {
            agent,
            outcome: AgentOutcome::Failed(failure),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }
}
