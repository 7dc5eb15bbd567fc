//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rolling-window tic-tac-toe: three marks each, the oldest rolls off.
#[derive(Parser, Debug)]
#[command(name = "rolling-tictactoe")]
#[command(about = "Tic-tac-toe where each player keeps at most three marks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "rolling_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply cell indices (0-8) to a fresh game and print each result
    Script {
        /// Emit one JSON object per move instead of text
        #[arg(long)]
        json: bool,

        /// Cell indices in play order, X first
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}
