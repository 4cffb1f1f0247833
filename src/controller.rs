//! Session coordinator: current state plus navigable move history.

use crate::action::{Action, Move};
use crate::history::MoveHistory;
use crate::invariants::{self, HistoryConsistentInvariant, Invariant};
use crate::logic::{self, advance, is_valid_move};
use crate::types::{GameState, GameStatus};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One game session.
///
/// Owns the only mutable state in the crate. Every method replaces the
/// current [`GameState`] wholesale; nothing patches it in place. Use
/// from one caller at a time.
#[derive(Debug, Clone, Serialize)]
pub struct GameController {
    state: GameState,
    history: MoveHistory,
}

impl GameController {
    /// Creates a session at the initial state with an empty history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: logic::initial_state(),
            history: MoveHistory::new(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// All recorded moves.
    pub fn moves(&self) -> &[Move] {
        self.history.moves()
    }

    /// Number of recorded moves.
    pub fn total_moves(&self) -> usize {
        self.history.len()
    }

    /// Index of the move currently shown; `-1` at game start.
    pub fn current_index(&self) -> isize {
        self.history.current_index()
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Returns `false` and changes nothing when the game is over or the
    /// square is off the board or occupied. When the cursor is behind the
    /// end of the history, later moves are discarded first.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.state.status() != GameStatus::InProgress {
            debug!(status = ?self.state.status(), "Move rejected, game is over");
            return false;
        }
        if !is_valid_move(self.state.board(), row, col) {
            debug!("Move rejected, square unavailable");
            return false;
        }

        let player = self.state.current_player();
        let next = match advance(&self.state, row, col) {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "Validated move failed to apply");
                return false;
            }
        };

        self.history.record(Move::new(row, col, player));
        self.state = next;
        info!(
            index = self.history.current_index(),
            status = ?self.state.status(),
            "Move played"
        );
        self.assert_invariants();
        true
    }

    /// Returns to the initial state and clears the history.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state = logic::initial_state();
        self.history.clear();
        info!("Game reset");
    }

    /// Shows the position after move `index` (`-1` for the empty board).
    ///
    /// Out-of-range targets are ignored and `false` is returned. The
    /// state is rebuilt by replaying the recorded moves from an empty
    /// board; no moves are discarded.
    #[instrument(skip(self), fields(recorded = self.history.len()))]
    pub fn go_to_move(&mut self, index: isize) -> bool {
        if !self.history.contains_index(index) {
            debug!("Ignoring out-of-range history index");
            return false;
        }

        let state = match self.history.replay(index) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Recorded history failed to replay");
                return false;
            }
        };

        self.state = state;
        self.history.seek(index);
        debug!(status = ?self.state.status(), "Moved through history");
        self.assert_invariants();
        true
    }

    /// Steps one move back. Returns whether the cursor moved.
    pub fn go_back(&mut self) -> bool {
        self.can_go_back() && self.go_to_move(self.current_index() - 1)
    }

    /// Steps one move forward. Returns whether the cursor moved.
    pub fn go_forward(&mut self) -> bool {
        self.can_go_forward() && self.go_to_move(self.current_index() + 1)
    }

    /// Jumps to the empty board, keeping the history.
    pub fn go_to_start(&mut self) -> bool {
        self.go_to_move(-1)
    }

    /// Jumps to the latest recorded move.
    pub fn go_to_end(&mut self) -> bool {
        self.go_to_move(self.history.len() as isize - 1)
    }

    /// Move number shown to users: `0` at game start.
    pub fn current_move_number(&self) -> usize {
        self.history.applied()
    }

    /// Checks whether an earlier point in history exists.
    pub fn can_go_back(&self) -> bool {
        self.current_index() >= 0
    }

    /// Checks whether a later recorded move exists.
    pub fn can_go_forward(&self) -> bool {
        self.current_index() < self.history.len() as isize - 1
    }

    /// Applies an [`Action`]. Returns whether the session changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Play { row, col } => self.make_move(row, col),
            Action::Reset => {
                self.reset_game();
                true
            }
            Action::GoTo(index) => self.go_to_move(index),
            Action::Back => self.go_back(),
            Action::Forward => self.go_forward(),
        }
    }

    /// Debug builds only.
    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            let checked = invariants::check_state(&self.state);
            if let Err(violations) = &checked {
                warn!(?violations, "State invariants violated");
            }
            debug_assert!(checked.is_ok(), "State invariants violated: {checked:?}");
            debug_assert!(
                HistoryConsistentInvariant::holds(self),
                "{}",
                HistoryConsistentInvariant::description()
            );
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
