//! UI-side controls: the board cursor and command translation.
//!
//! The cursor is the only piece of state the UI owns. Everything else
//! (board, history, turn) lives in the core and reaches the UI through the
//! render projection.

use crate::UiAction;
use tui_tictactoe_types::{cell_index, cell_row_col, GameCommand, BOARD_SIDE, CELL_COUNT};

/// Board cursor plus the UI-action to game-command translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    cursor: usize,
}

impl Controls {
    /// Start with the cursor on the center cell
    pub fn new() -> Self {
        Self { cursor: 4 }
    }

    /// The cell the cursor is on (0-8)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Translate a UI action into a game command
    ///
    /// Cursor-only actions update the cursor and yield no command. History
    /// navigation clamps at both ends of the history, so holding a key at
    /// the boundary produces no redundant commands. `current_step` and
    /// `history_len` come from the render projection and always satisfy
    /// `current_step < history_len`.
    pub fn apply(
        &mut self,
        action: UiAction,
        current_step: usize,
        history_len: usize,
    ) -> Option<GameCommand> {
        match action {
            UiAction::CursorUp => {
                self.move_cursor(-1, 0);
                None
            }
            UiAction::CursorDown => {
                self.move_cursor(1, 0);
                None
            }
            UiAction::CursorLeft => {
                self.move_cursor(0, -1);
                None
            }
            UiAction::CursorRight => {
                self.move_cursor(0, 1);
                None
            }
            UiAction::Place => Some(GameCommand::ApplyMove(self.cursor)),
            UiAction::PlaceAt(index) if index < CELL_COUNT => {
                // Snap the cursor so the attempted cell stays visible.
                self.cursor = index;
                Some(GameCommand::ApplyMove(index))
            }
            UiAction::PlaceAt(_) => None,
            UiAction::HistoryPrev => {
                (current_step > 0).then(|| GameCommand::JumpTo(current_step - 1))
            }
            UiAction::HistoryNext => {
                (current_step + 1 < history_len).then(|| GameCommand::JumpTo(current_step + 1))
            }
            UiAction::HistoryFirst => (current_step != 0).then_some(GameCommand::JumpTo(0)),
            UiAction::HistoryLast => {
                (current_step + 1 < history_len).then(|| GameCommand::JumpTo(history_len - 1))
            }
            UiAction::Restart => Some(GameCommand::Restart),
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let (row, col) = cell_row_col(self.cursor);
        let side = BOARD_SIDE as isize;
        let row = (row as isize + d_row).rem_euclid(side) as usize;
        let col = (col as isize + d_col).rem_euclid(side) as usize;
        self.cursor = cell_index(row, col);
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}
