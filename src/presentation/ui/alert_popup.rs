use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::utils::centered_rect;
use crate::domain::{Alert, AlertLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;
const MIN_WIDTH: u16 = 30;

/// Blocking modal for the alert at the front of the queue.
pub struct AlertPopup<'a> {
    alert: &'a Alert,
    pending: usize,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    /// Creates popup for `alert`.
    #[must_use]
    pub const fn new(alert: &'a Alert, theme: &'a Theme) -> Self {
        Self {
            alert,
            pending: 0,
            theme,
        }
    }

    /// Number of alerts queued behind this one.
    #[must_use]
    pub const fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    fn color(&self) -> Color {
        match self.alert.level {
            AlertLevel::Success => Color::Green,
            AlertLevel::Error => Color::Red,
        }
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = self.alert.message.as_str();
        let title = format!(" {} ", self.alert.title);

        let width = u16::try_from(message.width().max(title.width()))
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .clamp(MIN_WIDTH, MAX_WIDTH);
        let inner_width = width.saturating_sub(4).max(1);
        let lines = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .div_ceil(inner_width)
            .max(1);
        // Borders, blank line and the hint line.
        let height = lines.saturating_add(4).min(12);

        let popup_area = centered_rect(width, height, area);
        let color = self.color();

        let hint = if self.pending > 0 {
            format!("[Enter] OK  (+{} more)", self.pending)
        } else {
            "[Enter] OK".to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));

        let mut text: Vec<Line<'_>> = vec![Line::from(message)];
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(hint, self.theme.dimmed_style)).centered());

        Clear.render(popup_area, buf);
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}

/// Yes/no prompt shown before closing.
pub struct ConfirmPopup<'a> {
    question: &'a str,
    theme: &'a Theme,
}

impl<'a> ConfirmPopup<'a> {
    /// Creates popup asking `question`.
    #[must_use]
    pub const fn new(question: &'a str, theme: &'a Theme) -> Self {
        Self { question, theme }
    }
}

impl Widget for ConfirmPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = u16::try_from(self.question.width())
            .unwrap_or(u16::MAX)
            .saturating_add(6)
            .clamp(MIN_WIDTH, MAX_WIDTH);
        let popup_area = centered_rect(width, 5, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Span::styled(" Confirm ", self.theme.title_style()));

        let key_style = Style::default().add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(self.question).centered(),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", key_style.fg(Color::Green)),
                Span::raw(" Yes   "),
                Span::styled("[n]", key_style.fg(Color::Red)),
                Span::raw(" No"),
            ])
            .centered(),
        ];

        Clear.render(popup_area, buf);
        Paragraph::new(text).block(block).render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_error_alert_renders_message() {
        let alert = Alert::error("Failed to load user data");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        AlertPopup::new(&alert, &theme).pending(1).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Failed to load user data"));
        assert!(text.contains(" Error "));
        assert!(text.contains("+1 more"));
    }

    #[test]
    fn test_confirm_popup() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        ConfirmPopup::new("Close CryptoPro?", &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Close CryptoPro?"));
        assert!(text.contains("[y] Yes"));
    }
}
