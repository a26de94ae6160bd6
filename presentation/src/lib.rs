//! Presentation layer for math-council
//!
//! CLI argument definitions, console output formatting, and progress
//! display. This layer only reads from the domain's result types; all
//! decisions happen below it.

pub mod cli;
pub mod output;
pub mod progress;

pub use cli::{Cli, OutputFormat};
pub use output::ConsoleFormatter;
pub use progress::ProgressReporter;
