//! Rolling-window tic-tac-toe rules engine.
//!
//! Classic 3x3 tic-tac-toe with one house rule: each player keeps at most
//! three marks on the board. Placing a fourth rolls the player's oldest mark
//! off first, so games keep going until someone completes a line.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`GameState`], [`GameStatus`]
//! - **History**: [`MoveHistory`], each player's live marks oldest first
//! - **Rules**: win detection and eviction as pure functions
//! - **Invariants**: checkable properties every move preserves
//! - **Engine**: [`GameEngine`], the only owner and mutator of state
//!
//! # Example
//!
//! ```
//! use rolling_tictactoe::{GameEngine, MoveResult, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index);
//! }
//! match engine.apply_move(2) {
//!     MoveResult::Won { winner, winning_line, .. } => {
//!         assert_eq!(winner, Player::X);
//!         assert_eq!(winning_line, [0, 1, 2]);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, MoveResult};
pub use engine::GameEngine;
pub use history::{MARK_LIMIT, MoveHistory};
pub use position::Position;
pub use types::{Board, CELL_COUNT, GameState, GameStatus, Player, Square};
