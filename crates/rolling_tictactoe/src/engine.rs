//! The rolling-window game engine.

use crate::action::{MoveError, MoveResult};
use crate::invariants::assert_preserved;
use crate::position::Position;
use crate::rules::{self, Relief};
use crate::types::{GameState, GameStatus, Square};
use tracing::{debug, info, instrument, warn};

/// Owns a game's state and is the only thing that mutates it.
///
/// Callers drive the game with [`apply_move`](Self::apply_move) and
/// [`reset`](Self::reset) and render from the returned [`MoveResult`] or
/// from [`state`](Self::state).
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Restores the initial state and returns it.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        info!("Resetting game");
        self.state = GameState::new();
        self.snapshot()
    }

    /// Empty cells open for play; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.status.is_terminal() {
            return Vec::new();
        }
        Position::empty_cells(&self.state.board)
    }

    /// The completed line once the game is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.state.status {
            GameStatus::Won(_) => rules::winning_line(&self.state.board).map(|(_, line)| line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Order of evaluation:
    /// 1. a full board rolls off the oldest mark of X, then of O (if nothing
    ///    can be rolled off, the game is declared a draw);
    /// 2. a mover already holding three marks loses their oldest;
    /// 3. the mark is placed;
    /// 4. a completed line ends the game with the mover as winner;
    /// 5. otherwise the turn passes.
    ///
    /// Moves after the game ended, out-of-range indices and occupied cells
    /// are rejected and leave the state untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        match self.try_move(index) {
            Ok((next, result)) => {
                assert_preserved(&self.state, &next);
                self.state = next;
                result
            }
            Err(reason) => {
                debug!(%reason, "Move rejected");
                reason.into()
            }
        }
    }

    /// Runs a move against a staged copy, returning it with the result.
    fn try_move(&self, index: usize) -> Result<(GameState, MoveResult), MoveError> {
        if self.state.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let position = Position::try_from(index)?;

        let mut next = self.state.clone();
        let GameState {
            board,
            current_player,
            history,
            status,
        } = &mut next;
        let mover = *current_player;

        let mut evicted = match rules::relieve_full_board(board, history) {
            Relief::NotFull => Vec::new(),
            Relief::Freed(cells) => cells,
            Relief::Exhausted => {
                warn!("Board full with no marks to roll off, declaring a draw");
                *status = GameStatus::Draw;
                let result = MoveResult::Draw {
                    board: board.clone(),
                };
                return Ok((next, result));
            }
        };

        if !board.is_empty(index) {
            return Err(MoveError::CellOccupied(position));
        }

        evicted.extend(rules::enforce_capacity(board, history, mover));

        board.set(index, Square::Occupied(mover));
        history.push(mover, index);

        if let Some((winner, winning_line)) = rules::winning_line(board) {
            info!(%winner, ?winning_line, "Game won");
            *status = GameStatus::Won(winner);
            let result = MoveResult::Won {
                winner,
                winning_line,
                board: board.clone(),
                evicted,
            };
            return Ok((next, result));
        }

        *current_player = mover.opponent();
        debug!(%position, ?evicted, next = %current_player, "Move applied");
        let result = MoveResult::Applied {
            board: board.clone(),
            current_player: *current_player,
            evicted,
        };
        Ok((next, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    fn engine_with(marks: &[(usize, Player)], to_move: Player) -> GameEngine {
        let mut state = GameState::new();
        for &(index, player) in marks {
            state.board.set(index, Square::Occupied(player));
            state.history.push(player, index);
        }
        state.current_player = to_move;
        GameEngine { state }
    }

    /// X history 4,1,6 and O history 0,2,8; cells 3, 5, 7 marked with no history.
    ///
    /// ```text
    /// O|X|O
    /// O|X|X
    /// X|O|O
    /// ```
    fn full_board_engine() -> GameEngine {
        let mut engine = engine_with(
            &[
                (4, Player::X),
                (0, Player::O),
                (1, Player::X),
                (2, Player::O),
                (6, Player::X),
                (8, Player::O),
            ],
            Player::X,
        );
        engine.state.board.set(3, Square::Occupied(Player::O));
        engine.state.board.set(5, Square::Occupied(Player::X));
        engine.state.board.set(7, Square::Occupied(Player::O));
        engine
    }

    #[test]
    fn test_full_board_rolls_off_both_players_before_placing() {
        let mut engine = full_board_engine();
        assert!(engine.state.board.is_full());

        // Cell 4 is X's oldest mark and becomes free again.
        let result = engine.apply_move(4);

        let MoveResult::Applied {
            evicted,
            current_player,
            ..
        } = &result
        else {
            panic!("expected Applied, got {result:?}");
        };
        assert_eq!(evicted, &vec![4, 0]);
        assert_eq!(*current_player, Player::O);
        assert_eq!(engine.state.board.at(Position::Center), Square::Occupied(Player::X));
        assert!(engine.state.board.is_empty(0));
        assert_eq!(
            engine.state.history.marks(Player::X).iter().copied().collect::<Vec<_>>(),
            vec![1, 6, 4]
        );
    }

    #[test]
    fn test_full_board_target_still_occupied_is_rejected_without_changes() {
        let mut engine = full_board_engine();
        let before = engine.snapshot();

        let result = engine.apply_move(7);

        assert_eq!(
            result,
            MoveResult::Rejected {
                reason: MoveError::CellOccupied(Position::BottomCenter)
            }
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_full_board_without_history_is_a_draw() {
        let mut engine = GameEngine::new();
        for index in 0..9 {
            let player = if index % 2 == 0 { Player::X } else { Player::O };
            engine.state.board.set(index, Square::Occupied(player));
        }
        let board = engine.state.board.clone();

        let result = engine.apply_move(0);

        assert_eq!(result, MoveResult::Draw { board });
        assert_eq!(engine.state.status, GameStatus::Draw);
        assert!(engine.valid_moves().is_empty());
        assert_eq!(
            engine.apply_move(0),
            MoveResult::Rejected {
                reason: MoveError::GameOver
            }
        );
    }

    #[test]
    fn test_capacity_eviction_can_enable_a_win() {
        // X holds 0, 3, 8; playing 7 rolls off 0 and leaves 3, 8, 7: no line.
        // Then X 6 rolls off 3 and completes 6-7-8.
        let mut engine = engine_with(
            &[
                (0, Player::X),
                (1, Player::O),
                (3, Player::X),
                (2, Player::O),
                (8, Player::X),
                (4, Player::O),
            ],
            Player::X,
        );

        let result = engine.apply_move(7);
        assert_eq!(result.evicted(), &[0]);
        assert!(!result.is_game_over());

        engine.apply_move(0);
        let result = engine.apply_move(6);
        assert_eq!(
            result,
            MoveResult::Won {
                winner: Player::X,
                winning_line: [6, 7, 8],
                board: engine.state.board.clone(),
                evicted: vec![3],
            }
        );
        assert_eq!(engine.winning_line(), Some([6, 7, 8]));
        assert_eq!(engine.state.current_player, Player::X);
    }

    #[test]
    fn test_winning_line_absent_while_in_progress() {
        let engine = engine_with(&[(0, Player::X)], Player::O);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.valid_moves().len(), 8);
        assert_eq!(engine.state.board, {
            let mut board = Board::new();
            board.set(0, Square::Occupied(Player::X));
            board
        });
    }
}
