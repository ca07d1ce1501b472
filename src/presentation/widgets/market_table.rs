//! Market overview table.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::application::dto::MarketRow;
use crate::presentation::theme::Theme;

const HEADERS: [&str; 5] = ["Asset", "Name", "Price", "Holding", "Value"];

/// One row per priced asset with the selection used for trading.
pub struct MarketTable<'a> {
    rows: &'a [MarketRow],
    theme: &'a Theme,
    focused: bool,
}

impl<'a> MarketTable<'a> {
    /// Creates table over `rows`.
    #[must_use]
    pub const fn new(rows: &'a [MarketRow], theme: &'a Theme) -> Self {
        Self {
            rows,
            theme,
            focused: true,
        }
    }

    /// Sets whether the selection is highlighted.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(&self, row: &'a MarketRow) -> Row<'a> {
        let holding_style = if row.held {
            self.theme.base_style
        } else {
            self.theme.dimmed_style
        };

        Row::new(vec![
            Cell::from(Span::styled(
                row.symbol.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Cell::from(row.name.as_str()),
            Cell::from(Line::from(row.price.as_str()).right_aligned()),
            Cell::from(
                Line::from(Span::styled(row.holding.as_str(), holding_style)).right_aligned(),
            ),
            Cell::from(
                Line::from(Span::styled(row.holding_value.as_str(), holding_style)).right_aligned(),
            ),
        ])
    }
}

impl StatefulWidget for MarketTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed_style
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Market ", self.theme.title_style()));

        if self.rows.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Line::from(Span::styled("Waiting for prices…", self.theme.dimmed_style))
                .render(inner, buf);
            return;
        }

        let header = Row::new(HEADERS).style(self.theme.dimmed_style);
        let rows: Vec<Row<'_>> = self.rows.iter().map(|row| self.row(row)).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(self.theme.selection_style)
        .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, state);
    }
}
