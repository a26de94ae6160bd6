//! Use cases - the operations the application exposes.

pub mod solve_problem;

pub use solve_problem::{SolveError, SolveInput, SolveProblemUseCase};
