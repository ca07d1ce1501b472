//! Numeric amount input.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

const MAX_LEN: usize = 24;

/// Single-line field accepting a decimal quantity.
///
/// Only digits and one decimal separator (`.` or `,`) are accepted, so the
/// cursor is always a byte offset into ASCII text.
#[derive(Debug, Clone)]
pub struct AmountInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
}

impl AmountInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: true,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets whether the cursor is drawn.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Text as typed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value, dropping characters the field would reject.
    pub fn set_value(&mut self, value: &str) {
        self.clear();
        for c in value.chars() {
            self.input_char(c);
        }
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts character at cursor; returns whether it was accepted.
    pub fn input_char(&mut self, c: char) -> bool {
        let is_separator = c == '.' || c == ',';
        let accepted = self.value.len() < MAX_LEN
            && (c.is_ascii_digit() || (is_separator && !self.has_separator()));
        if accepted {
            self.value.insert(self.cursor, c);
            self.cursor += 1;
        }
        accepted
    }

    fn has_separator(&self) -> bool {
        self.value.contains(['.', ','])
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Applies an editing key; returns `false` for keys the field ignores.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }
}

impl Widget for &AmountInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let (text, text_style) = if self.value.is_empty() {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else {
            (self.value.as_str(), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(text).style(text_style).render(inner, buf);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x + u16::try_from(self.cursor).unwrap_or(u16::MAX);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn type_str(input: &mut AmountInput, text: &str) {
        for c in text.chars() {
            input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_accepts_decimal_amount() {
        let mut input = AmountInput::new("Amount");
        type_str(&mut input, "0.015");
        assert_eq!(input.value(), "0.015");
    }

    #[test]
    fn test_rejects_letters_and_second_separator() {
        let mut input = AmountInput::new("Amount");
        type_str(&mut input, "1a,5.0-");
        assert_eq!(input.value(), "1,50");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = AmountInput::new("Amount");
        type_str(&mut input, "125");
        input.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        input.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input.value(), "15");

        input.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        input.handle_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_set_value_filters() {
        let mut input = AmountInput::new("Amount");
        input.set_value("12.5 BTC");
        assert_eq!(input.value(), "12.5");
    }

    #[test]
    fn test_placeholder_rendered_when_empty() {
        let input = AmountInput::new("Amount").placeholder("0.00");
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "0");
        assert_eq!(buf[(2, 1)].symbol(), ".");
    }
}
