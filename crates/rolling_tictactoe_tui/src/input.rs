//! Keyboard mapping.

use crossterm::event::KeyCode;
use rolling_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place directly at a cell (keys `1`-`9`).
    PlaceAt(Position),
    /// Start over.
    Reset,
    /// Leave the program.
    Quit,
    /// Unbound key.
    Ignore,
}

impl From<KeyCode> for Command {
    fn from(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Command::Cursor(key),
            KeyCode::Enter | KeyCode::Char(' ') => Command::PlaceAtCursor,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|digit| Position::from_index(digit as usize - 1))
                .map_or(Command::Ignore, Command::PlaceAt),
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            _ => Command::Ignore,
        }
    }
}

/// Moves the cursor with arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
