//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: mark counts agree with the player to move.
///
/// X moves first, so X is to move when both players hold the same
/// number of squares and O is to move when X holds one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        match state.current_player() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
