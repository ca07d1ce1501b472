//! Executed transaction record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::{AssetSymbol, TradeSide};

/// What a history entry records.
///
/// The ledger also holds cash movements; kinds this client does not know
/// decode as `Other` so one entry cannot hide the rest of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Market buy.
    Buy,
    /// Market sell.
    Sell,
    /// Cash paid in.
    Deposit,
    /// Cash paid out.
    Withdraw,
    /// Anything newer than this client.
    #[serde(other)]
    Other,
}

impl TransactionKind {
    /// Lowercase name as sent by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::Other => "other",
        }
    }

    /// Trade direction, for buys and sells only.
    #[must_use]
    pub const fn trade_side(self) -> Option<TradeSide> {
        match self {
            Self::Buy => Some(TradeSide::Buy),
            Self::Sell => Some(TradeSide::Sell),
            Self::Deposit | Self::Withdraw | Self::Other => None,
        }
    }
}

/// One row of the user's history, newest first as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned ID.
    pub id: u64,
    /// What the row records.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Asset involved; `USD` for cash movements.
    pub crypto: AssetSymbol,
    /// Quantity moved.
    pub amount: f64,
    /// Zero for cash movements that carry no price.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
    /// Value in USD.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total: f64,
    /// Server time, naive UTC.
    pub timestamp: NaiveDateTime,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_history_entry() {
        let json = r#"{
            "id": 7,
            "type": "sell",
            "crypto": "ETH",
            "amount": 1.5,
            "price": 2500.0,
            "total": 3750.0,
            "timestamp": "2024-03-01T12:30:45.123456"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.kind, TransactionKind::Sell);
        assert_eq!(tx.kind.trade_side(), Some(TradeSide::Sell));
        assert_eq!(tx.crypto.as_str(), "ETH");
        assert_eq!(
            tx.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            "2024-03-01 12:30"
        );
    }

    #[test]
    fn test_cash_movements_do_not_break_history() {
        let json = r#"[
            {"id": 1, "type": "deposit", "crypto": "USD", "amount": 500.0,
             "price": null, "total": 500.0, "timestamp": "2024-03-01T09:00:00"},
            {"id": 2, "type": "buy", "crypto": "BTC", "amount": 0.01,
             "price": 45000.0, "total": 450.0, "timestamp": "2024-03-01T09:05:00"},
            {"id": 3, "type": "airdrop", "crypto": "SOL", "amount": 2.0,
             "timestamp": "2024-03-02T10:00:00"}
        ]"#;

        let history: Vec<Transaction> = serde_json::from_str(json).unwrap();

        let kinds: Vec<_> = history.iter().map(|tx| tx.kind).collect();
        assert_eq!(
            kinds,
            [
                TransactionKind::Deposit,
                TransactionKind::Buy,
                TransactionKind::Other
            ]
        );
        assert!(history[0].price.abs() < f64::EPSILON);
        assert!(history[0].kind.trade_side().is_none());
        assert!(history[2].total.abs() < f64::EPSILON);
    }
}
