//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Gallery command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the application.
    Quit,
    /// Open the size dropdown.
    OpenSelector,
    /// Close the size dropdown without changing the filter.
    CloseSelector,
    /// Apply the highlighted dropdown entry.
    ConfirmSelection,
    /// Move up (dropdown highlight or list scroll).
    Up,
    /// Move down (dropdown highlight or list scroll).
    Down,
    /// Switch to the previous filter.
    PreviousFilter,
    /// Switch to the next filter.
    NextFilter,
    /// Jump to the first row.
    Top,
    /// Jump to the last row.
    Bottom,
    /// Key has no binding in this context.
    None,
}

/// Terminal event handler.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key is a forced quit that works in every context.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Maps a key press to a gallery command.
    ///
    /// With the dropdown open, `Esc` closes it instead of quitting and the
    /// vertical keys move its highlight.
    #[must_use]
    pub fn gallery_action(key: &KeyEvent, selector_open: bool) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if Self::is_force_quit_event(key) {
            return KeyAction::Quit;
        }

        if selector_open {
            return match key.code {
                KeyCode::Esc => KeyAction::CloseSelector,
                KeyCode::Enter => KeyAction::ConfirmSelection,
                KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
                KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
                KeyCode::Char('q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        if Self::is_quit_event(key) {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('f') => KeyAction::OpenSelector,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
            KeyCode::Left | KeyCode::Char('h') => KeyAction::PreviousFilter,
            KeyCode::Right | KeyCode::Char('l') => KeyAction::NextFilter,
            KeyCode::Home | KeyCode::Char('g') => KeyAction::Top,
            KeyCode::End | KeyCode::Char('G') => KeyAction::Bottom,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
    }

    #[test_case(KeyCode::Enter, KeyAction::OpenSelector ; "enter opens")]
    #[test_case(KeyCode::Char('f'), KeyAction::OpenSelector ; "f opens")]
    #[test_case(KeyCode::Down, KeyAction::Down ; "arrow scrolls")]
    #[test_case(KeyCode::Char('k'), KeyAction::Up ; "vim scrolls")]
    #[test_case(KeyCode::Right, KeyAction::NextFilter ; "right cycles")]
    #[test_case(KeyCode::Char('h'), KeyAction::PreviousFilter ; "h cycles back")]
    #[test_case(KeyCode::Esc, KeyAction::Quit ; "esc quits")]
    #[test_case(KeyCode::Char('x'), KeyAction::None ; "unbound")]
    fn test_closed_selector_bindings(code: KeyCode, expected: KeyAction) {
        let key = make_key_event(code, KeyModifiers::NONE);
        assert_eq!(EventHandler::gallery_action(&key, false), expected);
    }

    #[test_case(KeyCode::Esc, KeyAction::CloseSelector ; "esc closes")]
    #[test_case(KeyCode::Enter, KeyAction::ConfirmSelection ; "enter selects")]
    #[test_case(KeyCode::Char('j'), KeyAction::Down ; "j moves")]
    #[test_case(KeyCode::Right, KeyAction::None ; "no cycling while open")]
    fn test_open_selector_bindings(code: KeyCode, expected: KeyAction) {
        let key = make_key_event(code, KeyModifiers::NONE);
        assert_eq!(EventHandler::gallery_action(&key, true), expected);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(EventHandler::gallery_action(&key, true), KeyAction::Quit);
        assert_eq!(EventHandler::gallery_action(&key, false), KeyAction::Quit);
    }

    #[test]
    fn test_release_is_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(EventHandler::gallery_action(&key, false), KeyAction::None);
    }
}
