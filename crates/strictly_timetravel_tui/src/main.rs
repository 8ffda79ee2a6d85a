//! Strictly Timetravel - terminal front-end
//!
//! Plays tic-tac-toe against yourself with a move list you can jump back
//! through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use std::sync::Mutex;
use strictly_timetravel::MoveOrder;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.descending {
        config = config.with_move_order(MoveOrder::Descending);
    }

    init_tracing(&config)?;
    info!(?config, "Starting Strictly Timetravel");

    tui::run(&config)
}

/// Sends tracing output to the configured log file so it stays off the terminal.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
