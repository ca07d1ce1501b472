use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Footer colors.
pub struct FooterBarStyle {
    /// Binding labels.
    pub label_style: Style,
    /// Key names.
    pub key_style: Style,
}

impl FooterBarStyle {
    /// Derives styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

/// Bottom line listing the visible key bindings.
pub struct FooterBar<'a> {
    keybindings: Vec<&'a Keybind>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates footer listing `keymap`.
    #[must_use]
    pub fn new(keybindings: impl IntoIterator<Item = &'a Keybind>) -> Self {
        Self {
            keybindings: keybindings.into_iter().collect(),
            style: FooterBarStyle::default(),
        }
    }

    /// Overrides the default style.
    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            other => {
                let _ = write!(s, "{other:?}");
            }
        }
        s
    }

    fn build_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        for (i, binding) in self.keybindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }
        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Line::from(self.build_spans()).render(Rect { height: 1, ..area }, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Keymap;

    #[test]
    fn test_format_key() {
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            "C-r"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            "F5"
        );
    }

    #[test]
    fn test_renders_visible_bindings_only() {
        let keymap = Keymap::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(keymap.visible()).render(area, &mut buf);

        let line: String = (0..80).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with(" Buy  b   Sell  s "));
        assert!(!line.contains("Down"));
    }
}
