//! Terminal front end for the rolling-window tic-tac-toe engine.
//!
//! The engine in [`rolling_tictactoe`] owns every rule; this crate only
//! reads its state and forwards key presses as cell indices.
//!
//! - **CLI**: `play` (interactive) and `script` (headless) subcommands
//! - **Config**: TOML settings with defaults
//! - **App**: cursor, messages and game-over notice around one engine
//! - **UI**: ratatui rendering, highlight of the winning line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod script;
pub mod terminal;
pub mod ui;

pub use app::{App, Flow};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
