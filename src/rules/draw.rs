//! Draw detection and status derivation for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// Derives the status from board contents alone.
#[instrument(skip(board))]
pub fn derive_status(board: &Board) -> GameStatus {
    if check_winner(board).is_some() {
        GameStatus::Won
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
