//! Application state and logic.
//!
//! `App` holds the engine plus purely presentational state (cursor, last
//! message, game-over notice). Nothing here decides game rules; every
//! board change comes from a [`MoveResult`].

use crate::input::{Command, move_cursor};
use crossterm::event::KeyCode;
use rolling_tictactoe::{GameEngine, GameStatus, MoveResult, Player, Position};
use tracing::{debug, info};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep drawing and reading keys.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    message: String,
    notice: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            message: ready_message(),
            notice: None,
        }
    }

    /// The engine, for read-only rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last action or rejection, shown under the board.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Game-over notice, shown as a popup until dismissed.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Turn or result indicator.
    pub fn status_label(&self) -> String {
        match self.engine.state().status() {
            GameStatus::InProgress => format!("Turn: {}", self.engine.state().current_player()),
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// True when the cell accepts a placement.
    pub fn is_enabled(&self, pos: Position) -> bool {
        !self.engine.state().status().is_terminal()
            && self.engine.state().board().is_empty(pos.to_index())
    }

    /// True when the cell is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.engine
            .winning_line()
            .is_some_and(|line| line.contains(&pos.to_index()))
    }

    /// True when the cell holds the mark the player to move would lose
    /// on their next placement.
    pub fn rolls_off_next(&self, pos: Position) -> bool {
        let state = self.engine.state();
        let mover = state.current_player();
        !state.status().is_terminal()
            && state.history().at_capacity(mover)
            && state.history().oldest(mover) == Some(pos.to_index())
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        let command = Command::from(key);
        if self.notice.is_some() && command != Command::Quit {
            debug!("Dismissing game-over notice");
            self.notice = None;
            return Flow::Continue;
        }

        match command {
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Command::Reset => self.reset(),
            Command::Quit => return Flow::Quit,
            Command::Ignore => {}
        }
        Flow::Continue
    }

    /// Asks the engine to place the current player's mark.
    pub fn place(&mut self, pos: Position) {
        let mover = self.engine.state().current_player();
        let result = self.engine.apply_move(pos.to_index());
        self.message = describe(mover, pos.to_index(), &result);

        match &result {
            MoveResult::Won { winner, .. } => {
                info!(%winner, "Game over");
                self.notice = Some(format!("{} wins!", winner));
            }
            MoveResult::Draw { .. } => {
                info!("Game over: draw");
                self.notice = Some("It's a draw!".to_string());
            }
            MoveResult::Applied { .. } | MoveResult::Rejected { .. } => {}
        }
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.message = ready_message();
        self.notice = None;
    }
}

fn ready_message() -> String {
    "New game. Player X's turn.".to_string()
}

/// One-line summary of a move attempt.
pub fn describe(mover: Player, index: usize, result: &MoveResult) -> String {
    let label = Position::from_index(index)
        .map(|pos| pos.label().to_string())
        .unwrap_or_else(|| format!("cell {}", index));
    let rolled_off = |evicted: &[usize]| {
        let labels: Vec<_> = evicted
            .iter()
            .filter_map(|&i| Position::from_index(i))
            .map(Position::label)
            .collect();
        if labels.is_empty() {
            String::new()
        } else {
            format!(" (rolled off {})", labels.join(", "))
        }
    };

    match result {
        MoveResult::Rejected { reason } => format!("Move rejected: {}", reason),
        MoveResult::Applied { evicted, .. } => {
            format!("{} played {}{}", mover, label, rolled_off(evicted.as_slice()))
        }
        MoveResult::Won { winner, evicted, .. } => {
            format!("{} played {}{}. {} wins!", mover, label, rolled_off(evicted.as_slice()), winner)
        }
        MoveResult::Draw { .. } => "Board full with nothing to roll off. It's a draw!".to_string(),
    }
}
