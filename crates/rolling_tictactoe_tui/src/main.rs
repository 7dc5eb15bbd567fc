//! Rolling-window tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use rolling_tictactoe_tui::{Cli, Command, TuiConfig, logging, script, terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;
    logging::init_tracing(&config)?;

    match cli.command {
        Command::Play => terminal::run(&config),
        Command::Script { json, moves } => {
            let stdout = std::io::stdout();
            script::run_script(&moves, json, &mut stdout.lock())?;
            Ok(())
        }
    }
}
