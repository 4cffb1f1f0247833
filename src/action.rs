//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and are recorded in the history once applied.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at `(row, col)`.
///
/// Moves are immutable once recorded. They are:
/// - Replayed to rebuild past positions
/// - Serialized for snapshots
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
    player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize, player: Player) -> Self {
        Self { row, col, player }
    }

    /// Row of this move (0-based).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of this move (0-based).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {} → ({}, {})",
            self.player,
            self.row + 1,
            self.col + 1
        )
    }
}

/// Error returned when a placement violates the move precondition.
///
/// Callers are expected to check [`crate::is_valid_move`] first, so
/// this signals a contract violation rather than a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column is outside the board.
    #[display("Invalid move: {row}, {col} is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square is already occupied.
    #[display("Invalid move: {row}, {col} is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// A request a presentation layer can make of a
/// [`GameController`](crate::GameController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark.
    Play {
        /// Target row (0-based).
        row: usize,
        /// Target column (0-based).
        col: usize,
    },
    /// Start over with an empty board and history.
    Reset,
    /// Jump to a history index (-1 is the empty board).
    GoTo(isize),
    /// Step one move back in history.
    Back,
    /// Step one move forward in history.
    Forward,
}
