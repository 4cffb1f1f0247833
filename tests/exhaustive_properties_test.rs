//! Properties checked over every reachable position of the game tree.

use tictactoe_timeline::{
    GameController, GameState, GameStatus, advance, available_moves, check_winner,
    derive_status, initial_state, invariants, is_board_full,
};

/// Visits every reachable state once per path, depth first.
fn walk(state: &GameState, path: &mut Vec<(usize, usize)>, visit: &mut impl FnMut(&GameState, &[(usize, usize)])) {
    visit(state, path.as_slice());
    if state.is_over() {
        return;
    }
    for (row, col) in available_moves(state.board()) {
        let next = advance(state, row, col).expect("available move is valid");
        path.push((row, col));
        walk(&next, path, visit);
        path.pop();
    }
}

#[test]
fn test_status_properties_hold_everywhere() {
    let mut nodes = 0usize;
    let mut finished = (0usize, 0usize);

    walk(&initial_state(), &mut Vec::new(), &mut |state: &GameState, path: &[(usize, usize)]| {
        nodes += 1;
        let board = state.board();
        let status = derive_status(board);

        assert_eq!(status, state.status());
        assert_eq!(status == GameStatus::Won, check_winner(board).is_some());
        if is_board_full(board) && check_winner(board).is_none() {
            assert_eq!(status, GameStatus::Draw);
        }
        assert!(invariants::check_state(state).is_ok(), "invariants broken after {path:?}");

        match status {
            GameStatus::Won => finished.0 += 1,
            GameStatus::Draw => finished.1 += 1,
            GameStatus::InProgress => {}
        }
    });

    // Known sizes of the tic-tac-toe game tree.
    assert_eq!(nodes, 549_946);
    assert_eq!(finished, (209_088, 46_080));
}

#[test]
fn test_controller_replay_matches_play() {
    let mut leaf = 0usize;

    walk(&initial_state(), &mut Vec::new(), &mut |state: &GameState, path: &[(usize, usize)]| {
        if !state.is_over() {
            return;
        }
        leaf += 1;
        if leaf % 101 != 0 {
            return;
        }

        let mut controller = GameController::new();
        for &(row, col) in path {
            assert!(controller.make_move(row, col));
        }
        assert_eq!(controller.state(), state);

        let last = path.len() as isize - 1;
        controller.go_to_move(last / 2);
        let midway = *controller.state();
        controller.go_to_move(last / 2);
        assert_eq!(controller.state(), &midway);

        controller.go_to_move(last);
        assert_eq!(controller.state(), state);
    });
}
