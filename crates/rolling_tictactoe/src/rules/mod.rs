//! Game rules for rolling-window tic-tac-toe.
//!
//! Pure functions over the board and move history. The engine composes
//! them in a fixed order; they never look at whose turn it is.

pub mod eviction;
pub mod win;

pub use eviction::{Relief, enforce_capacity, relieve_full_board};
pub use win::{WIN_LINES, check_winner, winning_line};
