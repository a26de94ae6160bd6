//! CLI entrypoint for math-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration and credential are resolved here
//! and passed in explicitly; nothing below reads ambient state.

use anyhow::{Result, bail};
use clap::Parser;
use council_application::{SolveInput, SolveProblemUseCase};
use council_domain::{ModelId, Problem};
use council_infrastructure::{ConfigLoader, OpenRouterGateway, resolve_credential};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting math-council");

    // Resolve configuration and credential before anything touches the network
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    let api_key = resolve_credential(cli.api_key.clone(), &config)?;

    let models: Vec<ModelId> = if cli.model.is_empty() {
        config.models()
    } else {
        cli.model.iter().map(|s| s.parse().unwrap()).collect()
    };

    let Some(problem) = Problem::try_new(cli.problem_text()) else {
        bail!("Problem cannot be empty");
    };

    let mut params = config.solve_params();
    if let Some(secs) = cli.timeout_secs {
        params = params.with_timeout(Duration::from_secs(secs));
    }

    if !cli.quiet {
        println!();
        println!("Problem: {}", problem);
        println!(
            "Agents: {}",
            models
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OpenRouterGateway::new(api_key).with_base_url(config.base_url.clone()));
    let use_case = SolveProblemUseCase::new(gateway);
    let input = SolveInput::new(problem, models).with_params(params);

    // Execute with or without progress reporting
    let report = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&report),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };

    println!("{}", output);

    Ok(())
}
