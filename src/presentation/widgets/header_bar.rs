use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Reachability of the backend as last observed by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// No health check answered yet.
    #[default]
    Unknown,
    /// Last check succeeded.
    Online,
    /// Last check failed.
    Offline,
}

impl ApiStatus {
    /// Label shown next to the indicator.
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::Unknown => "CHECKING",
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }

    /// Dot shown before the label.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Online => "●",
            Self::Unknown => "◐",
            Self::Offline => "○",
        }
    }
}

/// Header colors.
pub struct HeaderBarStyle {
    /// App name.
    pub app_name: Style,
    /// Version number.
    pub version: Style,
    /// Host label.
    pub host: Style,
    /// Online indicator.
    pub status_online: Style,
    /// Offline indicator.
    pub status_offline: Style,
    /// Unknown indicator.
    pub status_unknown: Style,
}

impl HeaderBarStyle {
    /// Derives styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            host: Style::default().fg(Color::Gray),
            status_online: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_offline: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_unknown: Style::default().fg(Color::Yellow),
        }
    }
}

/// Top line: name, version, host and backend status.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    host: &'a str,
    api_status: ApiStatus,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates header.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            host: "",
            api_status: ApiStatus::default(),
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets the host label.
    #[must_use]
    pub const fn host(mut self, host: &'a str) -> Self {
        self.host = host;
        self
    }

    /// Sets the backend indicator.
    #[must_use]
    pub const fn api_status(mut self, status: ApiStatus) -> Self {
        self.api_status = status;
        self
    }

    /// Overrides the default style.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn status_style(&self) -> Style {
        match self.api_status {
            ApiStatus::Online => self.style.status_online,
            ApiStatus::Offline => self.style.status_offline,
            ApiStatus::Unknown => self.style.status_unknown,
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut left = vec![
            Span::styled(format!(" {} ", self.app_name), self.style.app_name),
            Span::styled(format!(" v{}", self.version), self.style.version),
        ];
        if !self.host.is_empty() {
            left.push(Span::styled(format!("  {}", self.host), self.style.host));
        }
        let left_line = Line::from(left);
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        Paragraph::new(left_line).render(area, buf);

        let status = format!(
            " {} {} ",
            self.api_status.indicator(),
            self.api_status.display_text()
        );
        let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);

        if status_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(status_width);
            let right_area = Rect::new(right_x, area.y, status_width, 1);
            Paragraph::new(Span::styled(status, self.status_style())).render(right_area, buf);
        }
    }
}
