//! Board module - the 3x3 grid as an immutable value
//!
//! The board is a flat array of 9 cells in row-major order (index 0 is the
//! top-left corner, index 8 the bottom-right). It is a `Copy` value: every
//! transition produces a new board rather than editing in place, which is
//! what keeps the move history append-only.

use tui_tictactoe_types::{Cell, Player, CELL_COUNT};

/// The game board - 3x3 cells in a flat row-major array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get cell at the given flat index
    ///
    /// Returns `None` if the index is out of bounds, `Some(cell)` otherwise.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check whether the cell at the given index is empty and in bounds
    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Check whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of marks on the board
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// A copy of this board with the given cell marked
    ///
    /// Pure placement: does not check occupancy or game rules, callers go
    /// through [`rules::apply_move`](crate::rules::apply_move) for that.
    /// The index must be in bounds.
    pub fn with(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        next.cells[index] = Some(player);
        next
    }

    /// The raw cells, row-major
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Parse a board from a 9-character string, row-major
    ///
    /// `X` and `O` are marks, `.` is an empty cell. Returns `None` on any
    /// other character or a wrong length. Meant for tests and contrived
    /// positions that legal play cannot reach.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_core::Board;
    ///
    /// let board = Board::from_marks("XXX.O.O..").unwrap();
    /// assert!(!board.is_full());
    /// assert!(Board::from_marks("XX").is_none());
    /// ```
    pub fn from_marks(s: &str) -> Option<Self> {
        if s.chars().count() != CELL_COUNT {
            return None;
        }
        let mut cells = [None; CELL_COUNT];
        for (i, ch) in s.chars().enumerate() {
            cells[i] = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' => None,
                _ => return None,
            };
        }
        Some(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
