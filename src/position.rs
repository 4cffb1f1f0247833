//! Named board positions and coordinate conversions.

use crate::types::{BOARD_SIZE, Board};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to flattened board index (`row * 3 + col`).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from flattened board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates position from `(row, col)`; `None` when either is out of bounds.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::from_index(coords_to_index(row, col))
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIZE
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIZE
    }

    /// Returns `(row, col)`.
    pub fn coords(self) -> (usize, usize) {
        index_to_coords(self.to_index())
    }

    /// Positions whose square is empty, in row-major order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Converts 2D coordinates to a flattened index.
pub fn coords_to_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// Converts a flattened index to 2D coordinates.
pub fn index_to_coords(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}
