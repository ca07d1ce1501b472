use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, Widget},
};

use crate::application::services::money::{format_price, format_quantity, format_usd};
use crate::domain::entities::{TradeSide, Transaction};
use crate::presentation::theme::Theme;

/// Executed trades, newest first.
pub struct HistoryTable<'a> {
    transactions: Option<&'a [Transaction]>,
    timestamp_format: &'a str,
    theme: &'a Theme,
}

impl<'a> HistoryTable<'a> {
    /// Creates table over `transactions`.
    #[must_use]
    pub const fn new(
        transactions: Option<&'a [Transaction]>,
        timestamp_format: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            transactions,
            timestamp_format,
            theme,
        }
    }

    fn row(&self, tx: &Transaction) -> Row<'static> {
        let kind_style = match tx.kind.trade_side() {
            Some(TradeSide::Buy) => self.theme.gain_style,
            Some(TradeSide::Sell) => self.theme.loss_style,
            None => self.theme.dimmed_style,
        };
        let price = if tx.kind.trade_side().is_some() {
            format_price(tx.price)
        } else {
            "-".to_string()
        };

        Row::new(vec![
            Line::from(tx.timestamp.format(self.timestamp_format).to_string()),
            Line::from(Span::styled(tx.kind.as_str().to_uppercase(), kind_style)),
            Line::from(tx.crypto.to_string()),
            Line::from(format_quantity(&tx.crypto, tx.amount)).right_aligned(),
            Line::from(price).right_aligned(),
            Line::from(format_usd(tx.total)).right_aligned(),
        ])
    }
}

impl Widget for HistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.dimmed_style)
            .title(Span::styled(" History ", self.theme.title_style()));

        let message = match self.transactions {
            None => Some("Loading history…"),
            Some([]) => Some("No trades yet"),
            Some(_) => None,
        };
        if let Some(message) = message {
            let inner = block.inner(area);
            block.render(area, buf);
            Line::from(Span::styled(message, self.theme.dimmed_style)).render(inner, buf);
            return;
        }

        let rows: Vec<Row<'_>> = self
            .transactions
            .unwrap_or_default()
            .iter()
            .map(|tx| self.row(tx))
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(17),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Length(13),
                Constraint::Length(13),
            ],
        )
        .header(
            Row::new(["Time", "Side", "Asset", "Amount", "Price", "Total"])
                .style(self.theme.dimmed_style),
        )
        .block(block)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AssetSymbol, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_renders_transaction() {
        let tx = Transaction {
            id: 1,
            kind: TransactionKind::Sell,
            crypto: AssetSymbol::new("ETH").unwrap(),
            amount: 1.5,
            price: 2500.0,
            total: 3750.0,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(14, 5, 0)
                .unwrap(),
        };
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);

        HistoryTable::new(Some(std::slice::from_ref(&tx)), "%Y-%m-%d %H:%M", &theme)
            .render(area, &mut buf);

        let line: String = (0..80).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(line.contains("2024-03-09 14:05"));
        assert!(line.contains("SELL"));
        assert!(line.contains("1.5000"));
        assert!(line.contains("$3,750.00"));
    }

    #[test]
    fn test_renders_deposit_without_price() {
        let tx = Transaction {
            id: 2,
            kind: TransactionKind::Deposit,
            crypto: AssetSymbol::cash(),
            amount: 500.0,
            price: 0.0,
            total: 500.0,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);

        HistoryTable::new(Some(std::slice::from_ref(&tx)), "%Y-%m-%d %H:%M", &theme)
            .render(area, &mut buf);

        let line: String = (0..80).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(line.contains("DEPOSIT"));
        assert!(line.contains("$500.00"));
        assert!(!line.contains("$0.00"));
    }

    #[test]
    fn test_empty_history() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        HistoryTable::new(Some(&[]), "%H:%M", &theme).render(area, &mut buf);

        let line: String = (0..40).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(line.contains("No trades yet"));
    }
}
