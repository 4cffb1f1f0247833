//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three flattened cell indices that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// Creates a line from three flattened indices.
    pub const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    /// Flattened indices of the line, in scan order.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Checks whether the flattened index is part of the line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().filter_map(|&i| Position::from_index(i))
    }
}

/// The eight lines, in priority order: rows top-to-bottom, columns
/// left-to-right, then the main and anti diagonal.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    // Columns
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    // Diagonals
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

/// A completed line and the player holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// Player with three in a row.
    pub player: Player,
    /// The line they hold.
    pub line: WinningLine,
}

/// Checks if there is a winner on the board.
///
/// Returns the first line (in [`WINNING_LINES`] order) whose three
/// squares are occupied by the same player, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|line| {
        let mut squares = line.positions().map(|pos| board.get(pos));
        let first = squares.next()?;
        match first {
            Square::Occupied(player) if squares.all(|sq| sq == first) => Some(Win {
                player,
                line: *line,
            }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, pos| board.with(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let win = check_winner(&board).expect("top row wins");
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line.cells(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(
            Player::O,
            &[Position::TopCenter, Position::Center, Position::BottomCenter],
        );
        let win = check_winner(&board).expect("middle column wins");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.cells(), [1, 4, 7]);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        let win = check_winner(&board).expect("diagonal wins");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.cells(), [0, 4, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::X,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(
            check_winner(&board).map(|w| w.line.cells()),
            Some([2, 4, 6])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with(Position::TopRight, Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_row_takes_priority_over_column() {
        // X holds both the top row and the left column.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(
            check_winner(&board).map(|w| w.line.cells()),
            Some([0, 1, 2])
        );
    }
}
