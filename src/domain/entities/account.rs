//! Trading account entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AssetSymbol, PriceMap};

/// Telegram user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelegramId(pub u64);

impl TelegramId {
    /// Raw numeric ID.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TelegramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TelegramId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Held quantity per asset symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceMap(BTreeMap<AssetSymbol, f64>);

impl BalanceMap {
    /// Creates an empty balance map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the held quantity, zero when the asset is absent.
    #[must_use]
    pub fn get(&self, symbol: &AssetSymbol) -> f64 {
        self.0.get(symbol).copied().unwrap_or(0.0)
    }

    /// Sets the quantity held of `symbol`.
    pub fn set(&mut self, symbol: AssetSymbol, amount: f64) {
        self.0.insert(symbol, amount);
    }

    /// Cash balance.
    #[must_use]
    pub fn cash(&self) -> f64 {
        self.get(&AssetSymbol::cash())
    }

    /// Overwrites entries with those present in `other`.
    pub fn merge(&mut self, other: &Self) {
        for (symbol, amount) in other.iter() {
            self.0.insert(symbol.clone(), amount);
        }
    }

    /// Iterates entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetSymbol, f64)> {
        self.0.iter().map(|(symbol, amount)| (symbol, *amount))
    }

    /// Non-cash assets with a non-zero balance.
    pub fn holdings(&self) -> impl Iterator<Item = (&AssetSymbol, f64)> {
        self.iter()
            .filter(|(symbol, amount)| !symbol.is_cash() && *amount != 0.0)
    }

    /// Number of entries, cash included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no balance is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AssetSymbol, f64)> for BalanceMap {
    fn from_iter<T: IntoIterator<Item = (AssetSymbol, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A user's account as reported by the backend.
///
/// Values are replaced wholesale on every fetch; nothing here is
/// validated against the market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Backend user ID.
    #[serde(default)]
    pub id: Option<u64>,
    /// Telegram user ID.
    #[serde(default)]
    pub telegram_id: Option<TelegramId>,
    /// Telegram username.
    #[serde(default)]
    pub username: Option<String>,
    /// Telegram first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Quantity held per asset, cash under `USD`.
    #[serde(default)]
    pub balances: BalanceMap,
    /// Cash plus holdings valued at market, in USD.
    #[serde(default)]
    pub total_value: f64,
}

impl Account {
    /// Creates account with balances and total value.
    #[must_use]
    pub fn new(balances: BalanceMap, total_value: f64) -> Self {
        Self {
            id: None,
            telegram_id: None,
            username: None,
            first_name: None,
            balances,
            total_value,
        }
    }

    /// Sets the first name used in the greeting.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Cash available for buying.
    #[must_use]
    pub fn available(&self) -> f64 {
        self.balances.cash()
    }

    /// Portion of the total value held in non-cash assets.
    #[must_use]
    pub fn assets_value(&self) -> f64 {
        self.total_value - self.available()
    }

    /// Applies the balances a trade returned and revalues the account.
    ///
    /// Holdings without a quote in `prices` drop out of the total until the
    /// next full account load.
    pub fn apply_balances(&mut self, update: &BalanceMap, prices: &PriceMap) {
        self.balances.merge(update);
        let holdings_value: f64 = self
            .balances
            .holdings()
            .filter_map(|(symbol, amount)| prices.price(symbol).map(|price| amount * price))
            .sum();
        self.total_value = self.balances.cash() + holdings_value;
    }

    /// Name used when greeting the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("trader")
    }
}
