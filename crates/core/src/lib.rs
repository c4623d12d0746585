//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules engine, the game state with its move
//! history, and the render projection. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: the same command sequence always produces the same state
//! - **Testable**: every rule and history transition is unit-testable
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the 3x3 board as an immutable 9-cell value
//! - [`rules`]: win/tie detection, move labels, move application
//! - [`game`]: history of snapshots, time travel, command dispatch
//! - [`snapshot`]: read-only render projection consumed by the UI
//!
//! # Game Rules
//!
//! - X moves first; turns alternate strictly (X on even steps)
//! - A move marks an empty cell; occupied cells and finished games ignore
//!   further moves
//! - Three equal marks across a row, column, or diagonal win
//! - A full board with no winner is a tie
//! - Every move appends a snapshot to the history; jumping to an earlier
//!   step and moving again discards the abandoned future first
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::{GameStatus, Player};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! game.apply_move(0); // X
//! game.apply_move(4); // O
//! game.apply_move(1); // X
//!
//! assert_eq!(game.history_len(), 4);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//!
//! // Time travel: revisit the position after the first move.
//! game.jump_to(1);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{GameState, Snapshot};
pub use rules::{apply_move, is_tie, move_label, winning_line, winning_lines, RuleViolation};
pub use snapshot::RenderSnapshot;
