//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for solve results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every agent's solution
    Full,
    /// Only the summary verdict
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for math-council
#[derive(Parser, Debug)]
#[command(name = "math-council")]
#[command(author, version, about = "Multi-agent math solver - several models answer, one verdict")]
#[command(long_about = r#"
math-council sends a math problem to several independently-configured LLM
agents in parallel, parses their structured solutions, and reconciles the
answers into a single verdict with a confidence label.

Configuration files are loaded from (in priority order):
1. MATH_COUNCIL_* environment variables
2. --config <path>    Explicit config file
3. ./council.toml     Project-level config
4. ~/.config/math-council/config.toml   Global config

The OpenRouter API key comes from --api-key, MATH_COUNCIL_API_KEY, or the
plain OPENROUTER_API_KEY environment variable.

Example:
  math-council "What is the area of a triangle with sides 3, 4, and 5?"
  math-council -m o1 -m deepseek-r1 "Solve x^2 - 5x + 6 = 0"
  math-council -o json "What is 17 * 23?"
"#)]
pub struct Cli {
    /// The math problem to solve (multiple words are joined with spaces)
    #[arg(value_name = "PROBLEM", required = true)]
    pub problem: Vec<String>,

    /// Agents to include in the council (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// OpenRouter API key (overrides configuration and environment)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Overall solve deadline in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// The problem words joined into one string
    pub fn problem_text(&self) -> String {
        self.problem.join(" ")
    }
}
