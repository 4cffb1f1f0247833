//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every
//! transition. The controller checks them in debug builds; tests can
//! check them directly.

pub mod alternating_turn;
pub mod history_consistent;
pub mod winner_status;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use winner_status::WinnerMatchesStatusInvariant;

use crate::types::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1> InvariantSet<S> for (I1,)
where
    I1: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

/// Invariants every [`GameState`] satisfies.
pub type GameStateInvariants = (WinnerMatchesStatusInvariant, AlternatingTurnInvariant);

/// Checks all state invariants, returning the violations.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameStateInvariants::check_all(state)
}
