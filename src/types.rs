//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::WinningLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length. The board is always `BOARD_SIZE` × `BOARD_SIZE`.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: every placement produces a new board and leaves
/// the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    ///
    /// Occupancy is not checked here; see [`crate::apply_move`].
    pub(crate) fn with(mut self, pos: Position, player: Player) -> Self {
        self.squares[pos.to_index()] = Square::Occupied(player);
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE * BOARD_SIZE] {
        &self.squares
    }

    /// Returns the board as rows of squares.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(BOARD_SIZE)
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Formats the board, bracketing the squares of `winning_line`.
    pub fn render(&self, winning_line: Option<&WinningLine>) -> String {
        let mut result = String::new();
        for (row, squares) in self.rows().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                let highlighted = winning_line
                    .is_some_and(|line| line.contains(row * BOARD_SIZE + col));
                if highlighted {
                    result.push_str(&format!("[{symbol}]"));
                } else {
                    result.push_str(&format!(" {symbol} "));
                }
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.rows().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won,
    /// Game ended in a draw.
    Draw,
}

/// Complete game state at one point in time.
///
/// Always rebuilt, never patched: `winner` and `winning_line` are set
/// exactly when `status` is [`GameStatus::Won`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Player to move next.
    pub(crate) current_player: Player,
    /// Game status.
    pub(crate) status: GameStatus,
    /// Winner, when the game is won.
    pub(crate) winner: Option<Player>,
    /// Winning line, when the game is won.
    pub(crate) winning_line: Option<WinningLine>,
}

impl GameState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Short status line for display.
    pub fn status_message(&self) -> String {
        match (self.status, self.winner) {
            (GameStatus::Won, Some(winner)) => format!("{winner} wins!"),
            (GameStatus::Draw, _) => "It's a draw!".to_string(),
            _ => format!("{}'s turn", self.current_player),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        crate::logic::initial_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.at(0, 3), None);
        assert_eq!(board.at(3, 0), None);
        assert_eq!(board.at(2, 2), Some(Square::Empty));
    }

    #[test]
    fn test_display() {
        let board = Board::new()
            .with(Position::TopLeft, Player::X)
            .with(Position::Center, Player::O);
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }

    #[test]
    fn test_render_brackets_winning_cells() {
        let board = Board::new()
            .with(Position::TopLeft, Player::X)
            .with(Position::TopCenter, Player::X)
            .with(Position::TopRight, Player::X);
        let line = WinningLine::new([0, 1, 2]);
        let rendered = board.render(Some(&line));
        assert!(rendered.starts_with("[X]|[X]|[X]"));
        assert!(!board.render(None).contains('['));
    }

    #[test]
    fn test_counts() {
        let board = Board::new()
            .with(Position::TopLeft, Player::X)
            .with(Position::Center, Player::O)
            .with(Position::BottomRight, Player::X);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.occupied(), 3);
    }
}
