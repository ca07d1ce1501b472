//! Portfolio headline figures.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::dto::PortfolioSummary;
use crate::presentation::theme::Theme;

/// Total, available and assets value side by side.
///
/// Renders an empty frame until an account has been loaded.
pub struct SummaryCard<'a> {
    summary: Option<&'a PortfolioSummary>,
    theme: &'a Theme,
}

impl<'a> SummaryCard<'a> {
    /// Creates card; `None` renders a placeholder.
    #[must_use]
    pub const fn new(summary: Option<&'a PortfolioSummary>, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }

    fn figure(&self, label: &'a str, value: &'a str) -> Paragraph<'a> {
        Paragraph::new(vec![
            Line::from(Span::styled(label, self.theme.dimmed_style)),
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .centered()
    }
}

impl Widget for SummaryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Span::styled(" Portfolio ", self.theme.title_style()));

        let Some(summary) = self.summary else {
            block.render(area, buf);
            return;
        };

        let greeting = format!(" Hello, {} ", summary.name);
        block = block.title(Line::from(greeting).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let [total, available, assets] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(inner);

        self.figure("Total Balance", &summary.total_balance)
            .render(total, buf);
        self.figure("Available", &summary.available_balance)
            .render(available, buf);
        self.figure("Assets Value", &summary.assets_value)
            .render(assets, buf);
    }
}
