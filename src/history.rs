//! Move log with a navigable cursor.

use crate::action::{Move, MoveError};
use crate::logic::{self, apply_move, next_player};
use crate::types::{Board, GameState};
use serde::Serialize;
use tracing::{debug, instrument};

/// Recorded moves plus the point in history currently shown.
///
/// The cursor is stored as the number of moves applied, so the
/// "before any move" position is `0` internally and `-1` through
/// [`MoveHistory::current_index`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveHistory {
    moves: Vec<Move>,
    applied: usize,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded moves, including any ahead of the cursor.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks whether any move was recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the last applied move; `-1` before any move.
    pub fn current_index(&self) -> isize {
        self.applied as isize - 1
    }

    /// Number of moves applied at the cursor.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Moves up to and including the cursor.
    pub fn applied_moves(&self) -> &[Move] {
        &self.moves[..self.applied]
    }

    /// Checks that `index` names a history point (`-1..len`).
    pub fn contains_index(&self, index: isize) -> bool {
        index >= -1 && index < self.moves.len() as isize
    }

    /// Drops moves after the cursor, appends `mov` and moves the cursor to it.
    #[instrument(skip(self), fields(applied = self.applied, recorded = self.moves.len()))]
    pub(crate) fn record(&mut self, mov: Move) {
        if self.applied < self.moves.len() {
            debug!(
                discarded = self.moves.len() - self.applied,
                "Branching history, discarding later moves"
            );
        }
        self.moves.truncate(self.applied);
        self.moves.push(mov);
        self.applied = self.moves.len();
    }

    /// Moves the cursor. Callers check [`Self::contains_index`] first.
    pub(crate) fn seek(&mut self, index: isize) {
        debug_assert!(self.contains_index(index));
        self.applied = (index + 1) as usize;
    }

    /// Clears every move.
    pub(crate) fn clear(&mut self) {
        self.moves.clear();
        self.applied = 0;
    }

    /// Rebuilds the game state for `moves[..=index]` from an empty board.
    ///
    /// `index == -1` yields the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if a recorded move cannot be replayed.
    #[instrument(skip(self))]
    pub fn replay(&self, index: isize) -> Result<GameState, MoveError> {
        let count = usize::try_from(index.saturating_add(1)).unwrap_or(0);
        let moves = &self.moves[..count.min(self.moves.len())];
        let Some(last) = moves.last() else {
            return Ok(logic::initial_state());
        };
        let board = moves.iter().try_fold(Board::new(), |board, mov| {
            apply_move(&board, mov.row(), mov.col(), mov.player())
        })?;
        Ok(logic::state_from_board(board, next_player(last.player())))
    }

    /// Display labels: `#0 Game start`, then one line per recorded move.
    pub fn labels(&self) -> Vec<String> {
        std::iter::once("#0 Game start".to_string())
            .chain(
                self.moves
                    .iter()
                    .enumerate()
                    .map(|(i, mov)| format!("#{} {}", i + 1, mov)),
            )
            .collect()
    }
}
