//! Move outcomes and rejection reasons.
//!
//! A move is a cell index chosen for the player to move. The engine answers
//! every attempt with a [`MoveResult`]; rejections carry a [`MoveError`]
//! instead of propagating as errors, since they are expected whenever the
//! caller's view of the board is stale.

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The index is outside `0..=8`.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// What a call to [`GameEngine::apply_move`](crate::GameEngine::apply_move) changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum MoveResult {
    /// Nothing changed.
    Rejected {
        /// Reason for the rejection.
        reason: MoveError,
    },
    /// Mark placed, turn passed to the other player.
    Applied {
        /// Board after the move.
        board: Board,
        /// Player to move next.
        current_player: Player,
        /// Cells cleared before placement, in clearing order.
        evicted: Vec<usize>,
    },
    /// Mark placed and completed a line. The game is frozen.
    Won {
        /// The mover.
        winner: Player,
        /// The completed line, to highlight.
        winning_line: [usize; 3],
        /// Board after the move.
        board: Board,
        /// Cells cleared before placement, in clearing order.
        evicted: Vec<usize>,
    },
    /// Full board with no history to roll off. The move was not placed.
    Draw {
        /// Board at the time the draw was declared.
        board: Board,
    },
}

impl MoveResult {
    /// True when the move was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveResult::Rejected { .. })
    }

    /// True when the result ended the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveResult::Won { .. } | MoveResult::Draw { .. })
    }

    /// Board after the move, `None` for rejections.
    pub fn board(&self) -> Option<&Board> {
        match self {
            MoveResult::Rejected { .. } => None,
            MoveResult::Applied { board, .. }
            | MoveResult::Won { board, .. }
            | MoveResult::Draw { board } => Some(board),
        }
    }

    /// Cells the move cleared before placing.
    pub fn evicted(&self) -> &[usize] {
        match self {
            MoveResult::Applied { evicted, .. } | MoveResult::Won { evicted, .. } => evicted,
            MoveResult::Rejected { .. } | MoveResult::Draw { .. } => &[],
        }
    }

    /// Converts a rejection into `Err` for callers that propagate with `?`.
    pub fn into_result(self) -> Result<Self, MoveError> {
        match self {
            MoveResult::Rejected { reason } => Err(reason),
            other => Ok(other),
        }
    }
}

impl From<MoveError> for MoveResult {
    fn from(reason: MoveError) -> Self {
        MoveResult::Rejected { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::InvalidIndex(11).to_string(),
            "Cell index 11 is out of range (must be 0-8)"
        );
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn test_into_result() {
        let rejected: MoveResult = MoveError::GameOver.into();
        assert!(rejected.is_rejected());
        assert_eq!(rejected.board(), None);
        assert_eq!(rejected.into_result(), Err(MoveError::GameOver));

        let draw = MoveResult::Draw { board: Board::new() };
        assert!(draw.is_game_over());
        assert!(draw.evicted().is_empty());
        assert!(draw.into_result().is_ok());
    }
}
