//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments and environment configuration
//! - runs the scrape pipeline
//! - prints a summary and the written paths

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{RemoteConfig, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `indicators` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli, RemoteConfig::from_env()?);

    let output = pipeline::run(&config)?;

    println!("{}", crate::report::format_run_summary(&output.results));
    for path in &output.written {
        println!("Wrote: {}", path.display());
    }

    Ok(())
}

pub fn run_config_from_args(cli: &Cli, remote: RemoteConfig) -> RunConfig {
    RunConfig {
        countries_path: cli.countries.clone(),
        out_compact: cli.out.clone(),
        out_full: cli.out_full.clone(),
        remote,
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings and errors).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
