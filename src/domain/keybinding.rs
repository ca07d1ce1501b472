use std::borrow::Cow;
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// What a key does in the portfolio screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Reload account and prices.
    Refresh,
    /// Open the buy dialog for the selected asset.
    Buy,
    /// Open the sell dialog for the selected asset.
    Sell,
    /// Show or hide the history panel.
    ToggleHistory,

    // Navigation
    /// Previous row.
    NavigateUp,
    /// Next row.
    NavigateDown,
    /// First row.
    SelectFirst,
    /// Last row.
    SelectLast,
}

/// A key bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key, matched ignoring shift on characters.
    pub key: KeyEvent,
    /// Bound action.
    pub action: Action,
    /// Footer text.
    pub label: Cow<'static, str>,
    /// Whether the footer lists this binding.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a binding shown in the footer.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Keeps the binding out of the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        normalize(key) == normalize(&self.key)
    }
}

/// Ordered list of key bindings; the first match wins.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<Keybind>,
}

impl Default for Keymap {
    fn default() -> Self {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        Self {
            bindings: vec![
                Keybind::new(key(KeyCode::Char('b')), Action::Buy, "Buy"),
                Keybind::new(key(KeyCode::Char('s')), Action::Sell, "Sell"),
                Keybind::new(key(KeyCode::Char('r')), Action::Refresh, "Refresh"),
                Keybind::new(key(KeyCode::Char('h')), Action::ToggleHistory, "History"),
                Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Quit"),
                Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Home), Action::SelectFirst, "First").hidden(),
                Keybind::new(key(KeyCode::End), Action::SelectLast, "Last").hidden(),
                Keybind::new(
                    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    Action::Quit,
                    "Quit",
                )
                .hidden(),
            ],
        }
    }
}

impl Keymap {
    /// Builds the default keymap with user overrides placed first.
    ///
    /// Unparseable key strings are skipped.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut keymap = Self::default();
        let mut custom: Vec<Keybind> = overrides
            .iter()
            .filter_map(|(key, action)| {
                let event = parse_key(key);
                if event.is_none() {
                    tracing::warn!(key = %key, "Ignoring unparseable keybinding");
                }
                event.map(|event| Keybind::new(event, *action, key.clone()).hidden())
            })
            .collect();
        custom.sort_by(|a, b| a.label.cmp(&b.label));
        custom.append(&mut keymap.bindings);
        keymap.bindings = custom;
        keymap
    }

    /// Action bound to `key`.
    #[must_use]
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action)
    }

    /// Bindings shown in the footer.
    pub fn visible(&self) -> impl Iterator<Item = &Keybind> {
        self.bindings.iter().filter(|binding| binding.visible_in_bar)
    }
}

fn normalize(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        KeyCode::Char(c) => (
            KeyCode::Char(c.to_ascii_lowercase()),
            key.modifiers.difference(KeyModifiers::SHIFT),
        ),
        code => (code, key.modifiers),
    }
}

/// Parses strings like `q`, `Ctrl+r`, `Alt+Enter` or `F5`.
#[must_use]
pub fn parse_key(binding: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = binding.split('+').map(str::trim).collect();
    let key = parts.pop().filter(|k| !k.is_empty())?;

    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        lower if lower.starts_with('f') && lower.len() > 1 => {
            KeyCode::F(lower[1..].parse().ok()?)
        }
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("q", KeyCode::Char('q'), KeyModifiers::NONE ; "plain_char")]
    #[test_case("Ctrl+r", KeyCode::Char('r'), KeyModifiers::CONTROL ; "ctrl_char")]
    #[test_case("Alt+Enter", KeyCode::Enter, KeyModifiers::ALT ; "alt_enter")]
    #[test_case("F5", KeyCode::F(5), KeyModifiers::NONE ; "function_key")]
    #[test_case("space", KeyCode::Char(' '), KeyModifiers::NONE ; "space")]
    fn test_parse_key(binding: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key(binding), Some(KeyEvent::new(code, modifiers)));
    }

    #[test_case("" ; "empty")]
    #[test_case("Hyper+x" ; "unknown_modifier")]
    #[test_case("abc" ; "multi_char")]
    #[test_case("Ctrl+" ; "dangling_modifier")]
    fn test_parse_key_rejects(binding: &str) {
        assert!(parse_key(binding).is_none());
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(keymap.action_for(&key), Some(Action::Buy));

        let shifted = KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT);
        assert_eq!(keymap.action_for(&shifted), Some(Action::Buy));

        let unbound = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(keymap.action_for(&unbound), None);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = HashMap::from([
            ("b".to_string(), Action::Refresh),
            ("Ctrl+q".to_string(), Action::Quit),
            ("Nope+x".to_string(), Action::Buy),
        ]);
        let keymap = Keymap::with_overrides(&overrides);

        let b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(keymap.action_for(&b), Some(Action::Refresh));

        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(keymap.action_for(&ctrl_q), Some(Action::Quit));
    }

    #[test]
    fn test_visible_bindings_for_footer() {
        let keymap = Keymap::default();
        let labels: Vec<_> = keymap.visible().map(|k| k.label.as_ref()).collect();
        assert_eq!(labels, vec!["Buy", "Sell", "Refresh", "History", "Quit"]);
    }
}
