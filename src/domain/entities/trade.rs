//! Trade order entities.

use serde::{Deserialize, Serialize};

use super::{AssetSymbol, BalanceMap, TelegramId};
use crate::domain::errors::TradeError;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Spend cash to acquire the asset.
    Buy,
    /// Sell held asset for cash.
    Sell,
}

impl TradeSide {
    /// Past-tense verb for messages.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Buy => "bought",
            Self::Sell => "sold",
        }
    }

    /// Lowercase name used in URLs and history.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A market order at a fixed price.
///
/// Serializes to the body the backend expects; the side picks the endpoint
/// and is not part of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRequest {
    /// Buy or sell.
    #[serde(skip)]
    pub side: TradeSide,
    /// User placing the order.
    pub telegram_id: TelegramId,
    /// Traded asset.
    pub crypto: AssetSymbol,
    /// Quantity of the asset.
    pub amount: f64,
    /// Unit price in USD.
    pub price: f64,
}

impl TradeRequest {
    /// Builds a validated request.
    ///
    /// # Errors
    /// Returns error if the asset is the cash currency, or if amount or price
    /// is not a positive finite number.
    pub fn new(
        side: TradeSide,
        telegram_id: TelegramId,
        crypto: AssetSymbol,
        amount: f64,
        price: f64,
    ) -> Result<Self, TradeError> {
        if crypto.is_cash() {
            return Err(TradeError::CashNotTradable);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TradeError::InvalidAmount { amount });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(TradeError::InvalidPrice {
                symbol: crypto.to_string(),
                price,
            });
        }

        Ok(Self {
            side,
            telegram_id,
            crypto,
            amount,
            price,
        })
    }

    /// Cash moved by this trade.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.amount * self.price
    }
}

/// Result of an accepted trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOutcome {
    /// Side of the accepted order.
    pub side: TradeSide,
    /// Confirmation text from the server.
    pub message: String,
    /// Balances after the trade; only changed entries are present.
    pub new_balances: BalanceMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> AssetSymbol {
        AssetSymbol::new("BTC").unwrap()
    }

    #[test]
    fn test_body_matches_backend_contract() {
        let request =
            TradeRequest::new(TradeSide::Buy, TelegramId(42), btc(), 0.5, 45000.0).unwrap();

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "telegram_id": 42,
                "crypto": "BTC",
                "amount": 0.5,
                "price": 45000.0
            })
        );
        assert!((request.notional() - 22500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let zero = TradeRequest::new(TradeSide::Sell, TelegramId(1), btc(), 0.0, 1.0);
        assert!(matches!(zero, Err(TradeError::InvalidAmount { .. })));

        let nan = TradeRequest::new(TradeSide::Sell, TelegramId(1), btc(), f64::NAN, 1.0);
        assert!(matches!(nan, Err(TradeError::InvalidAmount { .. })));
    }

    #[test]
    fn test_rejects_bad_price() {
        let result = TradeRequest::new(TradeSide::Buy, TelegramId(1), btc(), 1.0, -3.0);
        assert!(matches!(result, Err(TradeError::InvalidPrice { .. })));
    }

    #[test]
    fn test_rejects_cash() {
        let result =
            TradeRequest::new(TradeSide::Buy, TelegramId(1), AssetSymbol::cash(), 1.0, 1.0);
        assert!(matches!(result, Err(TradeError::CashNotTradable)));
    }
}
