//! First-class invariants for rolling-window tic-tac-toe.
//!
//! Invariants are logical properties of a [`GameState`] that every
//! committed move must preserve. The engine checks them in debug builds;
//! tests check them directly.

use crate::history::MARK_LIMIT;
use crate::types::{GameState, GameStatus, Player, Square};
use strum::IntoEnumIterator;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: each history entry names a distinct cell holding that
/// player's mark, and no marked cell is missing from history.
pub struct HistoryMatchesBoard;

impl Invariant<GameState> for HistoryMatchesBoard {
    fn holds(state: &GameState) -> bool {
        Player::iter().all(|player| {
            let marks = state.history().marks(player);
            let all_owned = marks
                .iter()
                .all(|&index| state.board().get(index) == Some(Square::Occupied(player)));
            let distinct = marks
                .iter()
                .enumerate()
                .all(|(i, index)| !marks.iter().skip(i + 1).any(|other| other == index));
            all_owned && distinct && marks.len() == state.board().count(player)
        })
    }

    fn description() -> &'static str {
        "History entries match the marks on the board"
    }
}

/// Invariant: no player holds more than [`MARK_LIMIT`] marks.
pub struct WithinMarkLimit;

impl Invariant<GameState> for WithinMarkLimit {
    fn holds(state: &GameState) -> bool {
        Player::iter().all(|player| state.history().len(player) <= MARK_LIMIT)
    }

    fn description() -> &'static str {
        "Each player holds at most three marks"
    }
}

/// Invariant: a won game keeps the winner as the current player.
pub struct WinnerKeepsTurn;

impl Invariant<GameState> for WinnerKeepsTurn {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::Won(winner) => state.current_player() == winner,
            GameStatus::InProgress | GameStatus::Draw => true,
        }
    }

    fn description() -> &'static str {
        "A won game is frozen on the winner's turn"
    }
}

/// All rolling tic-tac-toe invariants as a composable set.
pub type RollingInvariants = (HistoryMatchesBoard, WithinMarkLimit, WinnerKeepsTurn);

/// Asserts that a transition out of a consistent state lands in a
/// consistent state (panics on violation in debug builds).
///
/// States that were already inconsistent are not checked.
pub fn assert_preserved(before: &GameState, after: &GameState) {
    if RollingInvariants::check_all(before).is_err() {
        return;
    }
    if let Err(violations) = RollingInvariants::check_all(after) {
        for violation in &violations {
            warn!(%violation, "Game state invariant failed");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }
}
