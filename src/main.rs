//! Trace Cache - A two-level LRU cache simulator
//!
//! Replays the words of a trace file through the configured cache levels and
//! prints hit statistics.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trace_cache::config::{Cli, OutputFormat};
use trace_cache::{Config, Report, Simulator};

/// Main entry point for the cache simulator.
///
/// # Run Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Parse and validate command-line configuration
/// 3. Create the cache levels
/// 4. Replay the trace file
/// 5. Print the report to stdout
fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trace_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_cli(Cli::parse())?;
    info!(
        "Configuration loaded: l1_size={}, l2_size={:?}, trace={}",
        config.l1_size,
        config.l2_size,
        config.trace_path.display()
    );

    let mut simulator = Simulator::from_config(&config)?;
    simulator
        .run_file(&config.trace_path)
        .with_context(|| format!("failed to replay {}", config.trace_path.display()))?;

    let report = Report::new(simulator.stats(), config.l1_size, config.l2_size);
    match config.format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if config.show_contents {
        println!("{}", simulator.l1());
        if let Some(l2) = simulator.l2() {
            println!("{}", l2);
        }
    }

    Ok(())
}
