//! Oldest-mark eviction.
//!
//! Two rules clear marks before a placement:
//! - a full board rolls off the oldest mark of each player, X first;
//! - a mover already holding [`MARK_LIMIT`](crate::MARK_LIMIT) marks loses their oldest one.

use crate::history::MoveHistory;
use crate::types::{Board, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Outcome of the full-board check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relief {
    /// At least one cell was empty; nothing was touched.
    NotFull,
    /// Cells cleared, in (X, O) order.
    Freed(Vec<usize>),
    /// Board full and neither player had history to roll off.
    Exhausted,
}

/// Rolls off the oldest mark of each player when every cell is occupied.
#[instrument(skip_all)]
pub fn relieve_full_board(board: &mut Board, history: &mut MoveHistory) -> Relief {
    if !board.is_full() {
        return Relief::NotFull;
    }

    let freed: Vec<usize> = Player::iter()
        .filter_map(|player| {
            let index = history.pop_oldest(player)?;
            board.clear(index);
            debug!(%player, index, "Full board: rolled off oldest mark");
            Some(index)
        })
        .collect();

    if freed.is_empty() {
        Relief::Exhausted
    } else {
        Relief::Freed(freed)
    }
}

/// Clears the mover's oldest mark if they are at capacity.
#[instrument(skip(board, history))]
pub fn enforce_capacity(
    board: &mut Board,
    history: &mut MoveHistory,
    player: Player,
) -> Option<usize> {
    if !history.at_capacity(player) {
        return None;
    }
    let index = history.pop_oldest(player)?;
    board.clear(index);
    debug!(%player, index, "Capacity reached: rolled off oldest mark");
    Some(index)
}
