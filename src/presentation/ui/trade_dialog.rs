//! Buy/sell order entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget},
};

use super::utils::centered_rect;
use crate::application::dto::TradeTicket;
use crate::application::services::money::{format_price, format_quantity, format_usd};
use crate::domain::entities::{AssetSymbol, TradeSide};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::AmountInput;

/// What the app should do after a key in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeDialogAction {
    /// Nothing to do.
    None,
    /// Send the order.
    Submit(TradeTicket),
    /// Close the dialog.
    Cancel,
}

/// Order form for one asset at the price shown when it was opened.
#[derive(Debug, Clone)]
pub struct TradeDialogState {
    side: TradeSide,
    symbol: AssetSymbol,
    name: String,
    price: f64,
    holding: f64,
    cash: f64,
    input: AmountInput,
    submitting: bool,
}

impl TradeDialogState {
    /// Creates dialog with an empty amount.
    #[must_use]
    pub fn new(
        side: TradeSide,
        symbol: AssetSymbol,
        name: impl Into<String>,
        price: f64,
        holding: f64,
        cash: f64,
    ) -> Self {
        Self {
            side,
            symbol,
            name: name.into(),
            price,
            holding,
            cash,
            input: AmountInput::new(" Amount ").placeholder("0.00"),
            submitting: false,
        }
    }

    /// Buy or sell.
    #[must_use]
    pub const fn side(&self) -> TradeSide {
        self.side
    }

    /// Asset being traded.
    #[must_use]
    pub const fn symbol(&self) -> &AssetSymbol {
        &self.symbol
    }

    /// Whether an order is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-enables the form after the server rejected the order.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
        self.input.set_focused(true);
    }

    /// Follows market refreshes while the form is open.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    fn ticket(&self) -> TradeTicket {
        TradeTicket::new(self.side, self.symbol.clone(), self.input.value())
    }

    /// Largest amount the balances allow, truncated to display precision.
    #[must_use]
    pub fn max_amount(&self) -> f64 {
        let raw = match self.side {
            TradeSide::Buy if self.price > 0.0 => self.cash / self.price,
            TradeSide::Buy => 0.0,
            TradeSide::Sell => self.holding,
        };
        let scale = 10f64.powi(i32::try_from(self.symbol.display_precision()).unwrap_or(4));
        (raw.max(0.0) * scale).floor() / scale
    }

    fn estimated_total(&self) -> Option<f64> {
        self.ticket().amount().ok().map(|amount| amount * self.price)
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> TradeDialogAction {
        if self.submitting {
            return TradeDialogAction::None;
        }

        match key.code {
            KeyCode::Esc => TradeDialogAction::Cancel,
            _ if EventHandler::is_submit_event(&key) => {
                if self.input.value().trim().is_empty() {
                    return TradeDialogAction::None;
                }
                self.submitting = true;
                self.input.set_focused(false);
                TradeDialogAction::Submit(self.ticket())
            }
            KeyCode::Tab => {
                let max = format_quantity(&self.symbol, self.max_amount());
                self.input.set_value(&max);
                TradeDialogAction::None
            }
            _ => {
                self.input.handle_key(key);
                TradeDialogAction::None
            }
        }
    }
}

/// Renders the trade dialog.
pub struct TradeDialog<'a> {
    theme: &'a Theme,
}

impl<'a> TradeDialog<'a> {
    /// Creates dialog widget.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for TradeDialog<'_> {
    type State = TradeDialogState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let popup_area = centered_rect(48, 11, area);
        let side_color = match state.side {
            TradeSide::Buy => Color::Green,
            TradeSide::Sell => Color::Red,
        };

        let title = format!(" {} {} ", state.side.as_str().to_uppercase(), state.symbol);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(side_color))
            .title(Span::styled(
                title,
                Style::default().fg(side_color).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(popup_area);
        Clear.render(popup_area, buf);
        block.render(popup_area, buf);

        let [info_area, input_area, total_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let available = match state.side {
            TradeSide::Buy => format!("Cash: {}", format_usd(state.cash)),
            TradeSide::Sell => format!(
                "Holding: {} {}",
                format_quantity(&state.symbol, state.holding),
                state.symbol
            ),
        };
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    state.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" @ "),
                Span::raw(format_price(state.price)),
            ]),
            Line::from(Span::styled(available, self.theme.dimmed_style)),
        ])
        .render(info_area, buf);

        (&state.input).render(input_area, buf);

        let total = state
            .estimated_total()
            .map_or_else(|| "-".to_string(), format_usd);
        Line::from(vec![
            Span::styled("Total: ", self.theme.dimmed_style),
            Span::styled(total, Style::default().add_modifier(Modifier::BOLD)),
        ])
        .render(total_area, buf);

        let hint = if state.submitting {
            "Submitting…"
        } else {
            "[Enter] Confirm  [Tab] Max  [Esc] Cancel"
        };
        Line::from(Span::styled(hint, self.theme.dimmed_style))
            .centered()
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog(side: TradeSide) -> TradeDialogState {
        TradeDialogState::new(
            side,
            AssetSymbol::new("BTC").unwrap(),
            "Bitcoin",
            40_000.0,
            0.25,
            10_000.0,
        )
    }

    #[test]
    fn test_enter_submits_ticket() {
        let mut state = dialog(TradeSide::Buy);
        state.handle_key(key(KeyCode::Char('0')));
        state.handle_key(key(KeyCode::Char('.')));
        state.handle_key(key(KeyCode::Char('1')));

        let action = state.handle_key(key(KeyCode::Enter));

        assert_eq!(
            action,
            TradeDialogAction::Submit(TradeTicket::new(
                TradeSide::Buy,
                AssetSymbol::new("BTC").unwrap(),
                "0.1"
            ))
        );
        assert!(state.is_submitting());
        assert_eq!(state.handle_key(key(KeyCode::Esc)), TradeDialogAction::None);
    }

    #[test]
    fn test_empty_amount_does_not_submit() {
        let mut state = dialog(TradeSide::Sell);
        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            TradeDialogAction::None
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Esc)),
            TradeDialogAction::Cancel
        );
    }

    #[test]
    fn test_max_amount() {
        assert!((dialog(TradeSide::Buy).max_amount() - 0.25).abs() < 1e-9);
        assert!((dialog(TradeSide::Sell).max_amount() - 0.25).abs() < 1e-9);

        let mut state = dialog(TradeSide::Sell);
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.input.value(), "0.250000");
    }

    #[test]
    fn test_failed_submission_reenables_form() {
        let mut state = dialog(TradeSide::Buy);
        state.handle_key(key(KeyCode::Char('1')));
        state.handle_key(key(KeyCode::Enter));
        state.submission_failed();

        assert!(!state.is_submitting());
        assert_eq!(
            state.handle_key(key(KeyCode::Esc)),
            TradeDialogAction::Cancel
        );
    }

    #[test]
    fn test_renders_estimated_total() {
        let theme = Theme::default();
        let mut state = dialog(TradeSide::Buy);
        state.handle_key(key(KeyCode::Char('2')));
        let area = Rect::new(0, 0, 60, 15);
        let mut buf = Buffer::empty(area);

        TradeDialog::new(&theme).render(area, &mut buf, &mut state);

        let text: String = (0..15)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("BUY BTC"));
        assert!(text.contains("$80,000.00"));
        assert!(text.contains("Bitcoin @ $40,000.00"));
    }
}
