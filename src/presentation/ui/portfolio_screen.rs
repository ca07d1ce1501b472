//! Main portfolio screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, TableState, Widget},
};

use crate::application::dto::{MarketRow, PortfolioSummary, Session, build_market_rows};
use crate::domain::entities::{Account, AssetSymbol, BalanceMap, PriceMap, Transaction};
use crate::domain::keybinding::Keymap;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ApiStatus, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, HistoryTable, MarketTable,
    StatusBar, SummaryCard,
};

const SUMMARY_HEIGHT: u16 = 4;

/// State of the portfolio screen.
pub struct PortfolioScreenState {
    account: Option<Account>,
    summary: Option<PortfolioSummary>,
    prices: PriceMap,
    rows: Vec<MarketRow>,
    table_state: TableState,
    /// Symbol to select once prices arrive.
    pending_symbol: Option<AssetSymbol>,
    transactions: Option<Vec<Transaction>>,
    show_history: bool,
    api_status: ApiStatus,
    status: StatusBar,
    host_label: String,
}

impl PortfolioScreenState {
    /// Creates empty state for `session`.
    #[must_use]
    pub fn new(session: &Session) -> Self {
        let host_label = match session.telegram_id {
            Some(id) => format!("{} · user {id}", session.host_description()),
            None => session.host_description().to_string(),
        };

        Self {
            account: None,
            summary: None,
            prices: PriceMap::new(),
            rows: Vec::new(),
            table_state: TableState::default(),
            pending_symbol: None,
            transactions: None,
            show_history: false,
            api_status: ApiStatus::Unknown,
            status: StatusBar::info("Loading portfolio…"),
            host_label,
        }
    }

    /// Restores the selection and panels of a previous run.
    #[must_use]
    pub fn with_restored(mut self, symbol: Option<AssetSymbol>, show_history: bool) -> Self {
        self.pending_symbol = symbol;
        self.show_history = show_history;
        self
    }

    /// Last loaded account.
    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Last loaded prices.
    #[must_use]
    pub const fn prices(&self) -> &PriceMap {
        &self.prices
    }

    /// Market rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[MarketRow] {
        &self.rows
    }

    /// Replaces the account and rebuilds rows.
    pub fn set_account(&mut self, account: Account) {
        self.summary = Some(PortfolioSummary::from_account(&account));
        self.account = Some(account);
        self.rebuild_rows();
    }

    /// Shows the balances a trade returned until the next account load.
    pub fn apply_trade_balances(&mut self, update: &BalanceMap) {
        let Some(account) = self.account.as_mut() else {
            return;
        };
        account.apply_balances(update, &self.prices);
        self.summary = Some(PortfolioSummary::from_account(account));
        self.rebuild_rows();
    }

    /// Replaces prices, keeping the selected symbol.
    pub fn set_prices(&mut self, prices: PriceMap) {
        if self.pending_symbol.is_none() {
            self.pending_symbol = self.selected_symbol().cloned();
        }
        self.prices = prices;
        self.rebuild_rows();
    }

    fn rebuild_rows(&mut self) {
        let keep = self
            .pending_symbol
            .take()
            .or_else(|| self.selected_symbol().cloned());
        self.rows = build_market_rows(
            &self.prices,
            self.account.as_ref().map(|account| &account.balances),
        );

        let index = keep
            .as_ref()
            .and_then(|symbol| self.rows.iter().position(|row| &row.symbol == symbol));
        if index.is_none() && keep.is_some() && self.rows.is_empty() {
            // Nothing to select yet; try again on the next price load.
            self.pending_symbol = keep;
        }
        self.table_state
            .select(index.or(if self.rows.is_empty() { None } else { Some(0) }));
    }

    /// Row under the cursor.
    #[must_use]
    pub fn selected_row(&self) -> Option<&MarketRow> {
        self.table_state.selected().and_then(|i| self.rows.get(i))
    }

    /// Symbol under the cursor.
    #[must_use]
    pub fn selected_symbol(&self) -> Option<&AssetSymbol> {
        self.selected_row().map(|row| &row.symbol)
    }

    /// Moves the cursor down.
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |i| (i + 1).min(self.rows.len() - 1));
        self.table_state.select(Some(next));
    }

    /// Moves the cursor up.
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(previous));
    }

    /// Moves the cursor to the first row.
    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    /// Moves the cursor to the last row.
    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Replaces the history panel rows.
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = Some(transactions);
    }

    /// Toggles the history panel; returns whether it is now shown.
    pub fn toggle_history(&mut self) -> bool {
        self.show_history = !self.show_history;
        self.show_history
    }

    /// Whether the history panel is open.
    #[must_use]
    pub const fn is_history_shown(&self) -> bool {
        self.show_history
    }

    /// Sets the header's backend indicator.
    pub fn set_api_status(&mut self, status: ApiStatus) {
        self.api_status = status;
    }

    /// Backend indicator shown in the header.
    #[must_use]
    pub const fn api_status(&self) -> ApiStatus {
        self.api_status
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: StatusBar) {
        self.status = status;
    }

    /// Current status line.
    #[must_use]
    pub const fn status(&self) -> &StatusBar {
        &self.status
    }
}

/// Renders header, summary, markets, history and footer.
pub struct PortfolioScreen<'a> {
    keymap: &'a Keymap,
    theme: &'a Theme,
    timestamp_format: &'a str,
    focused: bool,
}

impl<'a> PortfolioScreen<'a> {
    /// Creates screen widget.
    #[must_use]
    pub const fn new(keymap: &'a Keymap, theme: &'a Theme, timestamp_format: &'a str) -> Self {
        Self {
            keymap,
            theme,
            timestamp_format,
            focused: true,
        }
    }

    /// Whether the market table owns the keyboard; false while a modal is open.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for PortfolioScreen<'_> {
    type State = PortfolioScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, summary, body, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new("CryptoPro", crate::VERSION)
            .host(&state.host_label)
            .api_status(state.api_status)
            .style(HeaderBarStyle::from_theme(self.theme))
            .render(header, buf);

        SummaryCard::new(state.summary.as_ref(), self.theme).render(summary, buf);

        let market_area = if state.show_history {
            let [market, history] =
                Layout::vertical([Constraint::Fill(3), Constraint::Fill(2)]).areas(body);
            HistoryTable::new(
                state.transactions.as_deref(),
                self.timestamp_format,
                self.theme,
            )
            .render(history, buf);
            market
        } else {
            body
        };

        MarketTable::new(&state.rows, self.theme)
            .focused(self.focused)
            .render(market_area, buf, &mut state.table_state);

        (&state.status).render(status, buf);

        FooterBar::new(self.keymap.visible())
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MarketQuote, TelegramId};

    fn sym(s: &str) -> AssetSymbol {
        AssetSymbol::new(s).unwrap()
    }

    fn prices(symbols: &[&str]) -> PriceMap {
        symbols
            .iter()
            .map(|s| (sym(s), MarketQuote::new(*s, 10.0)))
            .collect()
    }

    fn state() -> PortfolioScreenState {
        PortfolioScreenState::new(&Session::new(Some(TelegramId(42)), false))
    }

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
    fn test_selection_survives_price_refresh() {
        let mut state = state();
        state.set_prices(prices(&["BTC", "ETH", "SOL"]));
        state.select_next();
        assert_eq!(state.selected_symbol(), Some(&sym("ETH")));

        state.set_prices(prices(&["ADA", "BTC", "ETH", "SOL"]));

        assert_eq!(state.selected_symbol(), Some(&sym("ETH")));
    }

    #[test]
    fn test_restored_symbol_selected_when_prices_arrive() {
        let mut state = state().with_restored(Some(sym("SOL")), true);
        assert!(state.selected_symbol().is_none());
        assert!(state.is_history_shown());

        state.set_prices(prices(&["BTC", "ETH", "SOL"]));

        assert_eq!(state.selected_symbol(), Some(&sym("SOL")));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = state();
        state.select_next();
        assert!(state.selected_symbol().is_none());

        state.set_prices(prices(&["BTC", "ETH"]));
        state.select_previous();
        assert_eq!(state.selected_symbol(), Some(&sym("BTC")));
        state.select_last();
        state.select_next();
        assert_eq!(state.selected_symbol(), Some(&sym("ETH")));
        state.select_first();
        assert_eq!(state.selected_symbol(), Some(&sym("BTC")));
    }

    #[test]
    fn test_account_updates_holdings() {
        let mut state = state();
        state.set_prices(prices(&["BTC"]));
        assert!(!state.rows()[0].held);

        let mut balances = BalanceMap::new();
        balances.set(sym("BTC"), 2.0);
        state.set_account(Account::new(balances, 20.0));

        assert!(state.rows()[0].held);
        assert_eq!(state.rows()[0].holding_value, "$20.00");
    }

    #[test]
    fn test_trade_balances_update_rows_before_reload() {
        let mut state = state();
        state.set_prices(prices(&["BTC", "ETH"]));
        state.set_account(Account::new(
            [(AssetSymbol::cash(), 100.0)].into_iter().collect(),
            100.0,
        ));
        assert!(!state.rows()[0].held);

        let update: BalanceMap = [(AssetSymbol::cash(), 80.0), (sym("BTC"), 2.0)]
            .into_iter()
            .collect();
        state.apply_trade_balances(&update);

        assert!(state.rows()[0].held);
        assert_eq!(state.rows()[0].holding_value, "$20.00");
        let account = state.account().unwrap();
        assert!((account.total_value - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_renders_assets_value() {
        let mut balances = BalanceMap::new();
        balances.set(AssetSymbol::cash(), 40.0);
        let mut state = state();
        state.set_account(Account::new(balances, 100.0));
        let keymap = Keymap::default();
        let theme = Theme::default();

        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        PortfolioScreen::new(&keymap, &theme, "%H:%M").render(area, &mut buf, &mut state);

        let text = buffer_text(&buf);
        assert!(text.contains("Assets Value"));
        assert!(text.contains("$60.00"));
        assert!(text.contains("standalone · user 42"));
        assert!(text.contains("Waiting for prices"));
    }
}
