//! Key mapping from terminal events to UI actions.

use crate::UiAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(UiAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiAction::CursorDown)
        }

        // Placing a mark
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Place),
        // Digits place directly, row-major from the top-left cell.
        KeyCode::Char(ch @ '1'..='9') => {
            Some(UiAction::PlaceAt(ch as usize - '1' as usize))
        }

        // Time travel
        KeyCode::Char('[') | KeyCode::PageUp | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(UiAction::HistoryPrev)
        }
        KeyCode::Char(']') | KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(UiAction::HistoryNext)
        }
        KeyCode::Home => Some(UiAction::HistoryFirst),
        KeyCode::End => Some(UiAction::HistoryLast),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(UiAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(UiAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(UiAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(UiAction::CursorDown)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(UiAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(UiAction::CursorUp)
        );
    }

    #[test]
    fn test_place_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(UiAction::Place)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiAction::Place)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(UiAction::PlaceAt(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(UiAction::PlaceAt(4))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(UiAction::PlaceAt(8))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(UiAction::HistoryPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(']'))),
            Some(UiAction::HistoryNext)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::PageUp)),
            Some(UiAction::HistoryPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Home)),
            Some(UiAction::HistoryFirst)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::End)),
            Some(UiAction::HistoryLast)
        );
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(UiAction::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
