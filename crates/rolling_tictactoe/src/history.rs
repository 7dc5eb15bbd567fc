//! Per-player rolling queues of live marks.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of marks a player may hold on the board at once.
pub const MARK_LIMIT: usize = 3;

/// Cell indices each player currently occupies, oldest first.
///
/// Every entry corresponds to exactly one cell on the board marked by that
/// player. The front of a queue is the mark that rolls off next.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    x: VecDeque<usize>,
    o: VecDeque<usize>,
}

impl MoveHistory {
    /// Creates empty queues for both players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a player's live marks, oldest first.
    pub fn marks(&self, player: Player) -> &VecDeque<usize> {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    fn marks_mut(&mut self, player: Player) -> &mut VecDeque<usize> {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Number of live marks for a player.
    pub fn len(&self, player: Player) -> usize {
        self.marks(player).len()
    }

    /// True when neither player has a mark recorded.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// The mark that would roll off next for `player`.
    pub fn oldest(&self, player: Player) -> Option<usize> {
        self.marks(player).front().copied()
    }

    /// True when the player's next placement evicts their oldest mark.
    pub fn at_capacity(&self, player: Player) -> bool {
        self.len(player) == MARK_LIMIT
    }

    /// Records a placement as the player's newest mark.
    pub(crate) fn push(&mut self, player: Player, index: usize) {
        self.marks_mut(player).push_back(index);
    }

    /// Removes and returns the player's oldest mark.
    pub(crate) fn pop_oldest(&mut self, player: Player) -> Option<usize> {
        self.marks_mut(player).pop_front()
    }
}
