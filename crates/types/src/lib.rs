//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid stored as a flat array of 9 cells in row-major
//! order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! For index `i`: row = `i / 3`, col = `i % 3`.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Player, GameCommand, cell_index, cell_row_col, CELL_COUNT};
//!
//! // Players alternate, X first
//! assert_eq!(Player::X.opponent(), Player::O);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Player::from_str("o"), Some(Player::O));
//!
//! // Index mapping
//! assert_eq!(cell_index(1, 1), 4);
//! assert_eq!(cell_row_col(8), (2, 2));
//! assert_eq!(CELL_COUNT, 9);
//!
//! // Commands carry their payload
//! let cmd = GameCommand::ApplyMove(4);
//! assert_eq!(cmd, GameCommand::ApplyMove(4));
//! ```

/// Board side length in cells (3 rows, 3 columns)
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A winning line: three cell indices that must hold the same mark
pub type WinLine = [usize; 3];

/// The eight winning lines in their fixed enumeration order:
/// rows top to bottom, then columns left to right, then the two diagonals.
///
/// The order is load-bearing: when more than one line is complete on a
/// contrived board, the first complete line in this order is reported.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Flat index for a (row, col) pair. Both are 0-based and must be < 3.
#[inline]
pub fn cell_index(row: usize, col: usize) -> usize {
    row * BOARD_SIDE + col
}

/// (row, col) pair for a flat index. 0-based.
#[inline]
pub fn cell_row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIDE, index % BOARD_SIDE)
}

/// The two marks
///
/// X always moves first; turns alternate strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Parse player from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::from_str("x"), Some(Player::X));
    /// assert_eq!(Player::from_str("O"), Some(Player::O));
    /// assert_eq!(Player::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Player::X),
            "o" => Some(Player::O),
            _ => None,
        }
    }

    /// Uppercase string representation ("X" or "O")
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    /// The board glyph for this player
    pub fn mark(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// The other player
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The player who moves at the given history step (X on even steps)
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(Player)`: cell marked by the given player
pub type Cell = Option<Player>;

/// Derived game status at a given history step
///
/// Never stored: always recomputed from the board so it cannot drift from
/// the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game continues; the named player moves next
    InProgress(Player),
    /// The named player completed a line
    Winner(Player),
    /// Board full with no winner
    Tie,
}

/// Command messages consumed by the game state
///
/// The UI layer is a producer of these commands and a consumer of the
/// render projection; there are no callbacks into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Place the next player's mark at the given cell index (0-8)
    ApplyMove(usize),
    /// Move the current-step pointer to the given history step
    JumpTo(usize),
    /// Throw away the history and start a fresh game
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_line_enumeration_order_is_rows_cols_diagonals() {
        assert_eq!(WIN_LINES[0], [0, 1, 2]);
        assert_eq!(WIN_LINES[2], [6, 7, 8]);
        assert_eq!(WIN_LINES[3], [0, 3, 6]);
        assert_eq!(WIN_LINES[5], [2, 5, 8]);
        assert_eq!(WIN_LINES[6], [0, 4, 8]);
        assert_eq!(WIN_LINES[7], [2, 4, 6]);
    }

    #[test]
    fn index_mapping_round_trips() {
        for i in 0..CELL_COUNT {
            let (r, c) = cell_row_col(i);
            assert_eq!(cell_index(r, c), i);
        }
        assert_eq!(cell_row_col(0), (0, 0));
        assert_eq!(cell_row_col(4), (1, 1));
        assert_eq!(cell_row_col(5), (1, 2));
    }

    #[test]
    fn turn_parity_is_derived_from_step() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(2), Player::X);
        assert_eq!(Player::for_step(9), Player::O);
    }
}
