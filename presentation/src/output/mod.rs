//! Output formatting for solve results.

pub mod console;

pub use console::ConsoleFormatter;
