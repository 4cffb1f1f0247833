//! Text and JSON rendering of a session for the terminal front-end.

use crate::config::{OutputFormat, PlayConfig};
use crate::controller::GameController;
use crate::logic::available_moves;
use tracing::instrument;

/// Renders the session the way `config` asks for.
///
/// # Errors
///
/// Returns the serializer error when JSON output is requested and the
/// session cannot be encoded.
#[instrument(skip_all, fields(output = %config.output()))]
pub fn render_session(controller: &GameController, config: &PlayConfig) -> Result<String, serde_json::Error> {
    match config.output() {
        OutputFormat::Json => serde_json::to_string(controller),
        OutputFormat::Text => Ok(render_text(controller, *config.show_available_moves())),
    }
}

fn render_text(controller: &GameController, show_available_moves: bool) -> String {
    let state = controller.state();
    let mut out = state.board().render(state.winning_line());
    out.push_str(&format!(
        "\n\n{}  (move {} of {})",
        state.status_message(),
        controller.current_move_number(),
        controller.total_moves()
    ));

    if show_available_moves && !state.is_over() {
        let cells = available_moves(state.board())
            .into_iter()
            .map(|(row, col)| format!("{} {}", row + 1, col + 1))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\nOpen: {cells}"));
    }
    out
}

/// Lists the history, marking the entry currently shown with `>`.
pub fn render_history(controller: &GameController) -> String {
    let current = controller.current_move_number();
    controller
        .history()
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if i == current { '>' } else { ' ' };
            format!("{marker} {label}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_game() -> GameController {
        let mut controller = GameController::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(controller.make_move(row, col));
        }
        controller
    }

    #[test]
    fn test_text_shows_status_and_progress() {
        let text = render_session(&won_game(), &PlayConfig::default()).expect("text render");
        assert!(text.starts_with("[X]|[X]|[X]"));
        assert!(text.contains("X wins!  (move 5 of 5)"));
        assert!(!text.contains("Open:"));
    }

    #[test]
    fn test_text_lists_open_squares() {
        let mut controller = GameController::new();
        controller.make_move(0, 0);
        let config = PlayConfig::default().with_available_moves(true);
        let text = render_session(&controller, &config).expect("text render");
        assert!(text.contains("O's turn  (move 1 of 1)"));
        assert!(text.contains("Open: 1 2, 1 3, 2 1, 2 2, 2 3, 3 1, 3 2, 3 3"));
    }

    #[test]
    fn test_json_snapshot() {
        let config = PlayConfig::default().with_output(OutputFormat::Json);
        let json = render_session(&won_game(), &config).expect("json render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["state"]["status"], "Won");
        assert_eq!(value["state"]["winner"], "X");
        assert_eq!(value["state"]["winning_line"], serde_json::json!([0, 1, 2]));
        assert_eq!(value["history"]["moves"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_history_marks_cursor() {
        let mut controller = won_game();
        controller.go_to_move(1);
        let listing = render_history(&controller);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "> #2 Player O → (2, 1)");
        assert!(lines[0].starts_with("  #0 Game start"));
    }
}
