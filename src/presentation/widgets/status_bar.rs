//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Neutral.
    Info,
    /// Completed.
    Success,
    /// Needs attention.
    Warning,
    /// Failed.
    Error,
}

impl StatusLevel {
    /// Message color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line status with a message on the left and context on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets the left-hand message.
    #[must_use]
    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.message = content.into();
        self
    }

    /// Sets the right-hand context.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets the severity.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Creates info status.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().message(message)
    }

    /// Creates success status.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Success)
    }

    /// Creates warning status.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Warning)
    }

    /// Creates error status.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Error)
    }

    /// Severity of the status.
    #[must_use]
    pub const fn current_level(&self) -> StatusLevel {
        self.level
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let width = usize::from(area.width);
        let message_width = self.message.width();
        let right_width = self.right.width();

        let mut spans = vec![Span::styled(self.message.as_str(), style)];

        // The right side is dropped rather than overlapping the message.
        if !self.right.is_empty() && message_width + 1 + right_width <= width {
            spans.push(Span::raw(" ".repeat(width - message_width - right_width)));
            spans.push(Span::styled(
                self.right.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
