//! Input module - key mapping and UI-side controls
//!
//! Two layers, both free of game logic:
//!
//! - [`map`]: a pure mapping from terminal key events to [`UiAction`]s
//! - [`Controls`]: the only UI-side state (the board cursor), translating
//!   actions into core [`GameCommand`]s
//!
//! The core never sees keys or cursors; it consumes command messages and
//! publishes a render projection.

pub mod controls;
pub mod map;

pub use tui_tictactoe_types as types;

pub use controls::Controls;
pub use map::{handle_key_event, should_quit};

/// Intent derived from a key press, before any state is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the board cursor one row up (wrapping)
    CursorUp,
    /// Move the board cursor one row down (wrapping)
    CursorDown,
    /// Move the board cursor one column left (wrapping)
    CursorLeft,
    /// Move the board cursor one column right (wrapping)
    CursorRight,
    /// Place a mark at the cursor
    Place,
    /// Place a mark at a specific cell (digit keys)
    PlaceAt(usize),
    /// Step one move back in the history
    HistoryPrev,
    /// Step one move forward in the history
    HistoryNext,
    /// Jump to the initial position
    HistoryFirst,
    /// Jump to the latest move
    HistoryLast,
    /// Start a fresh game
    Restart,
}
