//! Command-line interface for strictly_timetravel.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to TOML configuration (defaults to strictly_timetravel.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List moves latest first
    #[arg(long)]
    pub descending: bool,
}
