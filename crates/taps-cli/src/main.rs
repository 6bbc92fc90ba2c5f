//! Farrow taps generator: derives the FIR coefficient header for the
//! fractional-delay resampler.
//!
//! This is the main entry point. It is meant to run once as a build step.

mod config;
mod orchestrator;
mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "farrow-taps")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the coefficient header to create or overwrite
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the stability diagnostics
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = config::GeneratorConfig::new(cli.output)?;
    let generator = orchestrator::Generator::new(config);
    let results = generator.run()?;

    tracing::info!(
        "Generated {} coefficients into {:?} (maxsignal = {:.6})",
        results.table.len(),
        generator.config().output,
        results.report.max_signal
    );
    Ok(())
}
