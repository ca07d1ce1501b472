//! Portfolio view DTOs.

use crate::application::services::money::{format_price, format_quantity, format_usd};
use crate::domain::entities::{Account, AssetSymbol, BalanceMap, PriceMap};

/// Headline figures of the portfolio, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary {
    /// Greeting name.
    pub name: String,
    /// Total account value.
    pub total_balance: String,
    /// Cash available.
    pub available_balance: String,
    /// Value held in non-cash assets.
    pub assets_value: String,
}

impl PortfolioSummary {
    /// Builds summary from an account.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.display_name().to_string(),
            total_balance: format_usd(account.total_value),
            available_balance: format_usd(account.available()),
            assets_value: format_usd(account.assets_value()),
        }
    }
}

/// One line of the market overview.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketRow {
    /// Asset symbol.
    pub symbol: AssetSymbol,
    /// Display name.
    pub name: String,
    /// Formatted price.
    pub price: String,
    /// Formatted held quantity.
    pub holding: String,
    /// Formatted value of the holding.
    pub holding_value: String,
    /// Whether the user holds any of it.
    pub held: bool,
}

/// Builds market rows in symbol order.
///
/// Balances may be absent while the account is still loading.
#[must_use]
pub fn build_market_rows(prices: &PriceMap, balances: Option<&BalanceMap>) -> Vec<MarketRow> {
    prices
        .iter()
        .map(|(symbol, quote)| {
            let amount = balances.map_or(0.0, |b| b.get(symbol));
            MarketRow {
                symbol: symbol.clone(),
                name: quote.name.clone(),
                price: format_price(quote.price),
                holding: format_quantity(symbol, amount),
                holding_value: format_usd(amount * quote.price),
                held: amount != 0.0,
            }
        })
        .collect()
}
