//! Market price entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AssetSymbol;

/// Current price and display name of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Last price in USD.
    pub price: f64,
    /// Display name, e.g. "Bitcoin".
    pub name: String,
}

impl MarketQuote {
    /// Creates quote.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            price,
            name: name.into(),
        }
    }
}

/// Quotes keyed by asset symbol, iterated in symbol order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceMap(BTreeMap<AssetSymbol, MarketQuote>);

impl PriceMap {
    /// Creates an empty price map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quote for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &AssetSymbol) -> Option<&MarketQuote> {
        self.0.get(symbol)
    }

    /// Price of `symbol` in USD.
    #[must_use]
    pub fn price(&self, symbol: &AssetSymbol) -> Option<f64> {
        self.get(symbol).map(|quote| quote.price)
    }

    /// Inserts or replaces a quote.
    pub fn insert(&mut self, symbol: AssetSymbol, quote: MarketQuote) {
        self.0.insert(symbol, quote);
    }

    /// Iterates quotes in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetSymbol, &MarketQuote)> {
        self.0.iter()
    }

    /// Quoted symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &AssetSymbol> {
        self.0.keys()
    }

    /// Number of quoted assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no quotes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AssetSymbol, MarketQuote)> for PriceMap {
    fn from_iter<T: IntoIterator<Item = (AssetSymbol, MarketQuote)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_prices_endpoint() {
        let json = r#"{
            "SOL": {"name": "Solana", "price": 120.0},
            "BTC": {"name": "Bitcoin", "price": 45000.0},
            "ADA": {"name": "Cardano", "price": 0.48}
        }"#;

        let prices: PriceMap = serde_json::from_str(json).unwrap();

        let order: Vec<_> = prices.symbols().map(AssetSymbol::as_str).collect();
        assert_eq!(order, vec!["ADA", "BTC", "SOL"]);

        let btc = AssetSymbol::new("BTC").unwrap();
        assert_eq!(prices.get(&btc).unwrap().name, "Bitcoin");
    }

    #[test]
    fn test_missing_price() {
        let prices = PriceMap::new();
        assert!(prices.price(&AssetSymbol::new("DOT").unwrap()).is_none());
    }
}
