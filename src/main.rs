//! Fitness Tracker - Workout Metrics Calculator
//!
//! Main entry point. Prints one summary line per sensor package. An optional
//! first argument names a TOML file with the packages to read.

use anyhow::Context;
use fitness_tracker::{run_packages, storage::config::load_config};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only summaries
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Fitness Tracker v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_packages(&config.packages, &mut out).context("Failed to summarise packages")?;

    Ok(())
}
