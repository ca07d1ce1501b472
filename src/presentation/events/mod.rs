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

/// Key classification shared by screens and modals.
pub struct EventHandler;

impl EventHandler {
    /// Key releases and repeats are reported on some terminals; only presses count.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Ctrl+C always quits, even behind a modal.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Keys that close an alert.
    #[must_use]
    pub fn is_dismiss_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
    }

    /// Accepts a yes/no prompt.
    #[must_use]
    pub fn is_confirm_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Char('y' | 'Y'))
    }

    /// Rejects a yes/no prompt.
    #[must_use]
    pub fn is_cancel_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Esc | KeyCode::Char('n' | 'N'))
    }
}
