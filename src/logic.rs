//! Pure game logic: validation, placement and state transition.
//!
//! Nothing here holds state. Every function takes its inputs by
//! reference or value and returns a fresh result.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{Board, GameState, GameStatus, Player};
use tracing::{debug, instrument};

/// Checks that `(row, col)` is on the board and its square is empty.
#[instrument(skip(board))]
pub fn is_valid_move(board: &Board, row: usize, col: usize) -> bool {
    Position::from_coords(row, col).is_some_and(|pos| board.is_empty(pos))
}

/// Returns a new board with `player` placed at `(row, col)`.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] when
/// [`is_valid_move`] would be false.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, row: usize, col: usize, player: Player) -> Result<Board, MoveError> {
    let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied { row, col });
    }
    Ok(board.with(pos, player))
}

/// Checks if every square is occupied.
pub fn is_board_full(board: &Board) -> bool {
    rules::is_full(board)
}

/// Status as a function of board contents.
pub fn derive_status(board: &Board) -> GameStatus {
    rules::derive_status(board)
}

/// The player who moves after `player`.
pub fn next_player(player: Player) -> Player {
    player.opponent()
}

/// Empty board, X to move, game in progress.
pub fn initial_state() -> GameState {
    GameState {
        board: Board::new(),
        current_player: Player::X,
        status: GameStatus::InProgress,
        winner: None,
        winning_line: None,
    }
}

/// Derives a full state from a board and the player to move.
pub(crate) fn state_from_board(board: Board, current_player: Player) -> GameState {
    let win = rules::check_winner(&board);
    GameState {
        board,
        current_player,
        status: rules::derive_status(&board),
        winner: win.map(|w| w.player),
        winning_line: win.map(|w| w.line),
    }
}

/// Plays the current player's mark at `(row, col)`.
///
/// Finished games are not guarded here; callers check the status first.
///
/// # Errors
///
/// Propagates [`MoveError`] from [`apply_move`].
#[instrument(skip(state), fields(player = %state.current_player))]
pub fn advance(state: &GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    let board = apply_move(&state.board, row, col, state.current_player)?;
    let next = state_from_board(board, next_player(state.current_player));
    debug!(status = ?next.status, winner = ?next.winner, "Advanced game state");
    Ok(next)
}

/// Checks whether `(row, col)` lies on the winning line.
pub fn is_cell_in_winning_line(row: usize, col: usize, winning_line: Option<&WinningLine>) -> bool {
    match (winning_line, Position::from_coords(row, col)) {
        (Some(line), Some(pos)) => line.contains(pos.to_index()),
        _ => false,
    }
}

/// All empty squares as `(row, col)`, scanned row-major.
#[instrument(skip(board))]
pub fn available_moves(board: &Board) -> Vec<(usize, usize)> {
    Position::valid_moves(board)
        .into_iter()
        .map(Position::coords)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_valid_move_bounds_and_occupancy() {
        let board = Board::new();
        assert!(is_valid_move(&board, 0, 0));
        assert!(is_valid_move(&board, 2, 2));
        assert!(!is_valid_move(&board, 0, 3));
        assert!(!is_valid_move(&board, 3, 3));
        assert!(!is_valid_move(&board, usize::MAX, 0));

        let board = apply_move(&board, 0, 0, Player::X).expect("empty square");
        assert!(!is_valid_move(&board, 0, 0));
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = Board::new();
        let next = apply_move(&board, 1, 1, Player::O).expect("empty square");
        assert_eq!(next.at(1, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.at(1, 1), Some(Square::Empty));
    }

    #[test]
    fn test_apply_move_errors() {
        let board = apply_move(&Board::new(), 0, 0, Player::X).expect("empty square");
        assert_eq!(
            apply_move(&board, 0, 0, Player::O),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        assert_eq!(
            apply_move(&board, 0, 5, Player::O),
            Err(MoveError::OutOfBounds { row: 0, col: 5 })
        );
    }

    #[test]
    fn test_initial_state() {
        let state = initial_state();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_advance_switches_player() {
        let state = advance(&initial_state(), 1, 1).expect("valid move");
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().at(1, 1), Some(Square::Occupied(Player::X)));
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_advance_rejects_occupied() {
        let state = advance(&initial_state(), 1, 1).expect("valid move");
        assert!(matches!(advance(&state, 1, 1), Err(MoveError::Occupied { .. })));
    }

    #[test]
    fn test_advance_does_not_guard_finished_games() {
        let mut state = initial_state();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state = advance(&state, row, col).expect("valid move");
        }
        assert_eq!(state.status(), GameStatus::Won);
        // Still callable; the board simply keeps filling.
        let after = advance(&state, 2, 2).expect("square is empty");
        assert_eq!(after.status(), GameStatus::Won);
    }

    #[test]
    fn test_winning_cell_membership() {
        let line = WinningLine::new([2, 4, 6]);
        assert!(is_cell_in_winning_line(0, 2, Some(&line)));
        assert!(is_cell_in_winning_line(1, 1, Some(&line)));
        assert!(!is_cell_in_winning_line(0, 0, Some(&line)));
        assert!(!is_cell_in_winning_line(1, 1, None));
        assert!(!is_cell_in_winning_line(5, 5, Some(&line)));
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = apply_move(&Board::new(), 0, 1, Player::X).expect("empty square");
        let board = apply_move(&board, 2, 2, Player::O).expect("empty square");
        let moves = available_moves(&board);
        assert_eq!(
            moves,
            vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]
        );
        assert_eq!(available_moves(&Board::new()).len(), 9);
    }
}
