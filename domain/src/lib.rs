//! Domain layer for math-council
//!
//! This crate contains the core types and logic of the solver council:
//! the problem and agent identity value objects, the strict reply parser,
//! and the pure consensus summarizer. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A fixed set of independently-configured model agents all solve the
//! same problem. Individual failures are recorded, never fatal.
//!
//! ## Consensus
//!
//! The summarizer compares the agents' final answers after normalization
//! and produces one verdict: agreement, disagreement (with a plurality
//! pick), or all-failed, always with a confidence label and rationale.

pub mod consensus;
pub mod core;
pub mod prompt;
pub mod report;
pub mod solution;

// Re-export commonly used types
pub use consensus::{
    Confidence, ConsensusPolicy, ConsensusStatus, Summary, normalize_answer, summarize,
};
pub use self::core::{model::ModelId, problem::Problem};
pub use prompt::PromptTemplate;
pub use report::SolveReport;
pub use solution::{
    AgentFailure, AgentOutcome, AgentReport, AgentSolution, FailureKind, SolutionParseError,
    parse_solution,
};
