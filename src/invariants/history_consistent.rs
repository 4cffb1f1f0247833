//! History consistency invariant: the shown state is the replayed history.

use super::Invariant;
use crate::controller::GameController;

/// Invariant: the occupied square count equals the number of applied
/// moves, and replaying the history to the cursor reproduces the state.
pub struct HistoryConsistentInvariant;

impl Invariant<GameController> for HistoryConsistentInvariant {
    fn holds(controller: &GameController) -> bool {
        let history = controller.history();
        controller.state().board().occupied() == history.applied()
            && history
                .replay(history.current_index())
                .is_ok_and(|replayed| &replayed == controller.state())
    }

    fn description() -> &'static str {
        "Shown state matches the move history replayed to the cursor"
    }
}
