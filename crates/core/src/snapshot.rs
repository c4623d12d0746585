//! Render projection - the read-only state the UI draws from
//!
//! Building a [`RenderSnapshot`] never mutates the game; rendering may be
//! recomputed any number of times and always yields the same value for the
//! same state.

use crate::board::Board;
use crate::game::GameState;
use tui_tictactoe_types::{GameStatus, WinLine};

/// Everything the UI needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Board at the current step
    pub board: Board,
    /// Derived status at the current step
    pub status: GameStatus,
    /// Complete line to highlight when the game is won
    pub winning_line: Option<WinLine>,
    /// One label per history entry, in step order
    pub history_labels: Vec<String>,
    /// The step currently being viewed
    pub current_step: usize,
}

impl RenderSnapshot {
    pub(crate) fn of(game: &GameState) -> Self {
        let history_labels = game
            .snapshots()
            .enumerate()
            .map(|(step, snapshot)| match snapshot.move_label() {
                Some(label) => format!("Go to move #{step} with (row, col): {label}"),
                None => "GO to game start".to_string(),
            })
            .collect();

        Self {
            board: *game.board(),
            status: game.status(),
            winning_line: game.winning_line(),
            history_labels,
            current_step: game.current_step(),
        }
    }

    /// Number of history entries
    pub fn history_len(&self) -> usize {
        self.history_labels.len()
    }

    /// The user-facing status line
    ///
    /// Reuses the classic strings: `Winner: X`, `Tie!`, `Next player: O`.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Winner(player) => format!("Winner: {}", player.as_str()),
            GameStatus::Tie => "Tie!".to_string(),
            GameStatus::InProgress(player) => format!("Next player: {}", player.as_str()),
        }
    }
}
