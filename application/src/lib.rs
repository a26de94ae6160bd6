//! Application layer for math-council
//!
//! Use cases and ports. The [`SolveProblemUseCase`] is the composition
//! point of the whole system: it is the only component that touches both
//! the networked gateway port and the pure domain summarizer, and it
//! performs no logic of its own beyond that composition.

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::SolveParams;
pub use ports::{CompletionGateway, GatewayError, NoProgress, ProgressNotifier};
pub use use_cases::{SolveError, SolveInput, SolveProblemUseCase};
