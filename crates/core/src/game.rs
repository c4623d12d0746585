//! Game state module - the move history and its one mutable pointer
//!
//! The whole game is an append/truncate-only log of board snapshots plus a
//! single index into it. Whose turn it is falls out of the step number (X
//! moves on even steps), so turn order can never drift from the history.

use crate::board::Board;
use crate::rules;
use crate::snapshot::RenderSnapshot;
use tui_tictactoe_types::{GameCommand, GameStatus, Player, WinLine};

/// One moment of play: the board plus the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    /// Cell index of the move that produced this board; `None` only for
    /// the initial snapshot.
    last_move: Option<usize>,
}

impl Snapshot {
    /// The board at this step
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this board, if any
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// The "(row, col)" label of the move that produced this board
    pub fn move_label(&self) -> Option<String> {
        self.last_move.map(rules::move_label)
    }
}

/// Complete game state: the snapshot history and the current-step pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Snapshot>,
    current_step: usize,
}

impl GameState {
    /// Create a new game with a single empty snapshot
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot {
                board: Board::new(),
                last_move: None,
            }],
            current_step: 0,
        }
    }

    /// Number of snapshots in the history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The step currently being viewed (and played from)
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The snapshot at the current step
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// The board at the current step
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// The snapshot at an arbitrary step, bounds-checked
    pub fn snapshot_at(&self, step: usize) -> Option<&Snapshot> {
        self.history.get(step)
    }

    /// The player who moves next from the current step
    ///
    /// Derived from the step number, never stored: X moves on even steps.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// True when X moves next
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Dispatch a command message from the UI
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::ApplyMove(index) => {
                self.apply_move(index);
            }
            GameCommand::JumpTo(step) => self.jump_to(step),
            GameCommand::Restart => *self = Self::new(),
        }
    }

    /// Play the next player's mark at the given cell
    ///
    /// Illegal input (occupied cell, finished game, out-of-range index) is
    /// a silent no-op, matching the UI contract that illegal clicks have no
    /// visible effect. Returns whether a move was made.
    ///
    /// A legal move first discards any snapshots beyond the current step
    /// (the abandoned future after time travel), then appends the new
    /// snapshot and advances the pointer.
    pub fn apply_move(&mut self, index: usize) -> bool {
        let board = *self.board();
        if rules::winning_line(&board).is_some() || !board.is_empty_cell(index) {
            return false;
        }

        let player = self.next_player();
        // Guarded above, so the rules engine cannot refuse this move.
        let Ok(next_board) = rules::apply_move(&board, index, player) else {
            return false;
        };

        self.history.truncate(self.current_step + 1);
        self.history.push(Snapshot {
            board: next_board,
            last_move: Some(index),
        });
        self.current_step = self.history.len() - 1;
        true
    }

    /// Move the current-step pointer without touching the history
    ///
    /// # Panics
    ///
    /// Panics when `step` is out of range. The UI only offers steps it
    /// enumerated from this history, so an out-of-range step is a caller
    /// bug, not a user-facing condition.
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump_to({step}) outside history of {} steps",
            self.history.len()
        );
        self.current_step = step;
    }

    /// The winning line at the current step, if any
    pub fn winning_line(&self) -> Option<WinLine> {
        rules::winning_line(self.board())
    }

    /// Derived status of the board at the given step
    ///
    /// Returns `None` for an out-of-range step.
    pub fn status_at(&self, step: usize) -> Option<GameStatus> {
        let snapshot = self.snapshot_at(step)?;
        let line = rules::winning_line(snapshot.board());
        Some(match rules::winner(snapshot.board()) {
            Some(player) => GameStatus::Winner(player),
            None if rules::is_tie(snapshot.board(), line) => GameStatus::Tie,
            None => GameStatus::InProgress(Player::for_step(step)),
        })
    }

    /// Derived status at the current step
    pub fn status(&self) -> GameStatus {
        // current_step is always in range.
        self.status_at(self.current_step)
            .unwrap_or(GameStatus::InProgress(Player::X))
    }

    /// Build the read-only projection the UI renders from
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::of(self)
    }

    /// Iterate the history snapshots in order
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.history.iter()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
