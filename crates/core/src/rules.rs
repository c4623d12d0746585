//! Rules module - pure, stateless game rules
//!
//! Win and tie detection, move labels, and move application. All functions
//! here are total over arbitrary boards so they can be tested on positions
//! legal play would never reach. The game state pre-checks the same
//! predicates before calling [`apply_move`], so the error variants never
//! surface to the UI.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::board::Board;
use tui_tictactoe_types::{cell_row_col, Player, WinLine, CELL_COUNT, WIN_LINES};

/// Why a move could not be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Cell index outside 0..9
    #[error("cell index {0} is out of bounds")]
    OutOfBounds(usize),
    /// Target cell already holds a mark
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
    /// A winning line is already complete; the game is over
    #[error("the game is already won")]
    GameAlreadyWon,
}

/// First complete winning line on the board, if any
///
/// Scans the eight lines in their fixed enumeration order (rows, columns,
/// diagonals) and returns the first whose three cells hold the same mark.
/// The enumeration order is the tie-break when several lines are complete
/// at once, which only happens on contrived boards.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|line| line_owner(board, *line).is_some())
}

/// All complete winning lines in enumeration order
///
/// At most 8 on a fully contrived board, so the result fits a fixed
/// capacity with no allocation.
pub fn winning_lines(board: &Board) -> ArrayVec<WinLine, 8> {
    WIN_LINES
        .into_iter()
        .filter(|line| line_owner(board, *line).is_some())
        .collect()
}

/// The player owning a complete line, if all three cells match
fn line_owner(board: &Board, [a, b, c]: WinLine) -> Option<Player> {
    let mark = board.get(a)??;
    if board.get(b) == Some(Some(mark)) && board.get(c) == Some(Some(mark)) {
        Some(mark)
    } else {
        None
    }
}

/// The winner on the board, if any
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| line_owner(board, line))
}

/// True iff there is no winner and every cell is marked
///
/// Takes the already-computed winner so callers scanning for status do not
/// pay for a second line scan.
pub fn is_tie(board: &Board, winner: Option<WinLine>) -> bool {
    winner.is_none() && board.is_full()
}

/// 1-based "(row, col)" label for a cell index
///
/// # Examples
///
/// ```
/// use tui_tictactoe_core::move_label;
///
/// assert_eq!(move_label(0), "(1, 1)");
/// assert_eq!(move_label(4), "(2, 2)");
/// assert_eq!(move_label(8), "(3, 3)");
/// ```
pub fn move_label(index: usize) -> String {
    let (row, col) = cell_row_col(index);
    format!("({}, {})", row + 1, col + 1)
}

/// Apply a move, producing a new board
///
/// The input board is never mutated (value semantics). Fails when the index
/// is out of range, the cell is occupied, or the game already has a winner.
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, RuleViolation> {
    if index >= CELL_COUNT {
        return Err(RuleViolation::OutOfBounds(index));
    }
    if winning_line(board).is_some() {
        return Err(RuleViolation::GameAlreadyWon);
    }
    if !board.is_empty_cell(index) {
        return Err(RuleViolation::CellOccupied(index));
    }
    Ok(board.with(index, player))
}
