//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules only look at board contents,
//! so any status they report can be recomputed from the board alone.

pub mod draw;
pub mod win;

pub use draw::{derive_status, is_full};
pub use win::{WINNING_LINES, Win, WinningLine, check_winner};
