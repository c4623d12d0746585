//! Rules engine tests against the public facade.

use tui_tictactoe::core::{apply_move, is_tie, move_label, winning_line, winning_lines, Board};
use tui_tictactoe::core::RuleViolation;
use tui_tictactoe::types::{Player, CELL_COUNT, WIN_LINES};

/// Build the board whose cells are the base-3 digits of `code`
/// (0 empty, 1 X, 2 O), cell 0 in the lowest digit.
fn board_from_code(mut code: u32) -> Board {
    let mut marks = String::new();
    for _ in 0..CELL_COUNT {
        marks.push(match code % 3 {
            0 => '.',
            1 => 'X',
            _ => 'O',
        });
        code /= 3;
    }
    Board::from_marks(&marks).unwrap()
}

#[test]
fn winner_detection_agrees_with_naive_scan_on_all_boards() {
    // All 3^9 = 19683 cell assignments, reachable or not.
    for code in 0..3u32.pow(CELL_COUNT as u32) {
        let board = board_from_code(code);

        let naive_win = WIN_LINES.iter().any(|&[a, b, c]| {
            let cell = board.get(a).unwrap();
            cell.is_some() && board.get(b).unwrap() == cell && board.get(c).unwrap() == cell
        });

        assert_eq!(
            winning_line(&board).is_some(),
            naive_win,
            "disagreement on board code {code}"
        );
    }
}

#[test]
fn first_reported_line_follows_enumeration_order_on_all_boards() {
    for code in 0..3u32.pow(CELL_COUNT as u32) {
        let board = board_from_code(code);
        let all = winning_lines(&board);
        assert_eq!(winning_line(&board), all.first().copied());
    }
}

#[test]
fn tie_means_full_and_unwon() {
    for code in 0..3u32.pow(CELL_COUNT as u32) {
        let board = board_from_code(code);
        let winner = winning_line(&board);
        assert_eq!(
            is_tie(&board, winner),
            board.is_full() && winner.is_none(),
            "disagreement on board code {code}"
        );
    }
}

#[test]
fn move_labels_are_one_based() {
    assert_eq!(move_label(0), "(1, 1)");
    assert_eq!(move_label(4), "(2, 2)");
    assert_eq!(move_label(6), "(3, 1)");
    assert_eq!(move_label(8), "(3, 3)");
}

#[test]
fn apply_move_has_value_semantics() {
    let board = Board::from_marks("X.O......").unwrap();
    let next = apply_move(&board, 4, Player::X).unwrap();

    // Input untouched; output differs only at the played index.
    assert_eq!(board, Board::from_marks("X.O......").unwrap());
    assert_eq!(next, Board::from_marks("X.O.X....").unwrap());
}

#[test]
fn apply_move_error_taxonomy() {
    let open = Board::from_marks("X........").unwrap();
    assert_eq!(
        apply_move(&open, 0, Player::O),
        Err(RuleViolation::CellOccupied(0))
    );
    assert_eq!(
        apply_move(&open, 12, Player::O),
        Err(RuleViolation::OutOfBounds(12))
    );

    let won = Board::from_marks("OOOXX....").unwrap();
    assert_eq!(
        apply_move(&won, 8, Player::X),
        Err(RuleViolation::GameAlreadyWon)
    );
}

#[test]
fn rule_violations_render_messages() {
    assert_eq!(
        RuleViolation::CellOccupied(3).to_string(),
        "cell 3 is already occupied"
    );
    assert_eq!(
        RuleViolation::GameAlreadyWon.to_string(),
        "the game is already won"
    );
}
