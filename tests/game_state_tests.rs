//! Game state scenarios: move history, time travel, derived status.

use pretty_assertions::assert_eq;

use tui_tictactoe::core::GameState;
use tui_tictactoe::types::{GameCommand, GameStatus, Player};

#[test]
fn new_game_projection() {
    let game = GameState::new();
    let snap = game.render_snapshot();

    assert_eq!(snap.status, GameStatus::InProgress(Player::X));
    assert_eq!(snap.board.mark_count(), 0);
    assert_eq!(snap.history_labels, vec!["GO to game start".to_string()]);
    assert_eq!(snap.current_step, 0);
    assert_eq!(snap.winning_line, None);
}

#[test]
fn three_opening_moves() {
    let mut game = GameState::new();
    game.apply_move(0); // X
    game.apply_move(4); // O
    game.apply_move(1); // X

    let board = game.board();
    assert_eq!(board.get(0), Some(Some(Player::X)));
    assert_eq!(board.get(1), Some(Some(Player::X)));
    assert_eq!(board.get(4), Some(Some(Player::O)));
    assert_eq!(board.get(2), Some(None));
    assert_eq!(game.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn top_row_win_freezes_the_game() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(index);
    }

    assert_eq!(game.winning_line(), Some([0, 1, 2]));
    assert_eq!(game.status(), GameStatus::Winner(Player::X));

    // Every further click on any empty cell is a no-op.
    let frozen = game.clone();
    for index in 0..9 {
        assert!(!game.apply_move(index));
    }
    assert_eq!(game, frozen);
}

#[test]
fn full_board_no_line_is_a_tie() {
    let mut game = GameState::new();
    // X O X / X X O / O X O
    for index in [0, 1, 2, 5, 3, 6, 4, 8, 7] {
        game.apply_move(index);
    }

    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Tie);
    assert_eq!(game.render_snapshot().status_text(), "Tie!");
    assert_eq!(game.history_len(), 10);
}

#[test]
fn time_travel_truncates_before_appending() {
    let mut game = GameState::new();
    game.apply_move(0); // X
    game.apply_move(4); // O
    game.apply_move(1); // X
    assert_eq!(game.history_len(), 4);

    game.jump_to(1);
    // Step 1 is odd, so O moves next.
    assert!(!game.x_is_next());
    assert_eq!(game.board().mark_count(), 1);

    // The new move discards the abandoned future, then appends.
    game.apply_move(8);
    assert_eq!(game.history_len(), 3);
    assert_eq!(game.current_step(), 2);
    assert_eq!(game.board().get(8), Some(Some(Player::O)));
    assert_eq!(game.board().get(4), Some(None));
}

#[test]
fn history_labels_track_moves_and_branches() {
    let mut game = GameState::new();
    game.apply_move(4);
    game.apply_move(0);

    assert_eq!(
        game.render_snapshot().history_labels,
        vec![
            "GO to game start".to_string(),
            "Go to move #1 with (row, col): (2, 2)".to_string(),
            "Go to move #2 with (row, col): (1, 1)".to_string(),
        ]
    );

    // Branching rewrites the tail of the list.
    game.jump_to(1);
    game.apply_move(8);
    assert_eq!(
        game.render_snapshot().history_labels,
        vec![
            "GO to game start".to_string(),
            "Go to move #1 with (row, col): (2, 2)".to_string(),
            "Go to move #2 with (row, col): (3, 3)".to_string(),
        ]
    );
}

#[test]
fn turn_parity_holds_for_all_reachable_states() {
    let mut game = GameState::new();
    let moves = [4, 0, 8, 2, 6, 7, 1];
    for &index in &moves {
        assert_eq!(game.x_is_next(), game.current_step() % 2 == 0);
        game.apply_move(index);
    }
    for step in (0..game.history_len()).rev() {
        game.jump_to(step);
        assert_eq!(game.x_is_next(), step % 2 == 0);
    }
}

#[test]
fn render_projection_is_idempotent() {
    let mut game = GameState::new();
    game.apply_move(0);
    game.apply_move(4);
    game.jump_to(1);

    let first = game.render_snapshot();
    let second = game.render_snapshot();
    assert_eq!(first, second);
    // And building it did not disturb the state.
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.history_len(), 3);
}

#[test]
fn commands_drive_a_full_session() {
    let mut game = GameState::new();
    game.apply(GameCommand::ApplyMove(0));
    game.apply(GameCommand::ApplyMove(3));
    game.apply(GameCommand::ApplyMove(1));
    game.apply(GameCommand::JumpTo(0));
    assert_eq!(game.board().mark_count(), 0);
    assert_eq!(game.history_len(), 4);

    game.apply(GameCommand::Restart);
    assert_eq!(game, GameState::new());
}
