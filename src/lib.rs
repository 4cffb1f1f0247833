//! Tic-tac-toe with move-history time travel.
//!
//! The crate is a pure game core plus one stateful coordinator:
//!
//! - **Logic**: free functions over immutable [`Board`] and [`GameState`]
//!   values (validation, placement, win/draw detection, transition)
//! - **Controller**: [`GameController`] owns the current state and a
//!   [`MoveHistory`], and rebuilds the state by replaying the log
//!   whenever the user jumps through history
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameController, GameStatus, Player};
//!
//! let mut game = GameController::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert!(game.make_move(row, col));
//! }
//! assert_eq!(game.state().status(), GameStatus::Won);
//! assert_eq!(game.state().winner(), Some(Player::X));
//!
//! // Step back two plies and branch.
//! game.go_to_move(2);
//! assert!(game.make_move(2, 2));
//! assert_eq!(game.total_moves(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod command;
mod config;
mod controller;
mod history;
pub mod invariants;
mod logic;
mod position;
pub mod rules;
mod types;
mod view;

// Crate-level exports - Domain types
pub use action::{Action, Move, MoveError};
pub use position::{Position, coords_to_index, index_to_coords};
pub use rules::{WINNING_LINES, Win, WinningLine, check_winner};
pub use types::{BOARD_SIZE, Board, GameState, GameStatus, Player, Square};

// Crate-level exports - Game logic
pub use logic::{
    advance, apply_move, available_moves, derive_status, initial_state, is_board_full,
    is_cell_in_winning_line, is_valid_move, next_player,
};

// Crate-level exports - Session
pub use controller::GameController;
pub use history::MoveHistory;

// Crate-level exports - Terminal front-end support
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, OutputFormat, PlayConfig};
pub use view::{render_history, render_session};
