//! Winner/status invariant: a winner is recorded exactly when the game is won.

use super::Invariant;
use crate::rules::derive_status;
use crate::types::{GameState, GameStatus};

/// Invariant: `winner` and `winning_line` are present iff status is Won,
/// and the status agrees with the board.
pub struct WinnerMatchesStatusInvariant;

impl Invariant<GameState> for WinnerMatchesStatusInvariant {
    fn holds(state: &GameState) -> bool {
        let won = state.status() == GameStatus::Won;
        won == state.winner().is_some()
            && won == state.winning_line().is_some()
            && state.status() == derive_status(state.board())
    }

    fn description() -> &'static str {
        "Winner and winning line are set exactly when the board is won"
    }
}
