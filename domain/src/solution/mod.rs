//! Per-agent solutions: structured records and the strict reply parser.

pub mod entities;
pub mod parsing;

pub use entities::{AgentFailure, AgentOutcome, AgentReport, AgentSolution, FailureKind};
pub use parsing::{SolutionParseError, parse_solution};
