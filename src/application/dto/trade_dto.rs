//! Trade ticket DTO.

use crate::domain::entities::{AssetSymbol, TradeSide};
use crate::domain::errors::TradeError;

/// What the user entered in the trade dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeTicket {
    /// Buy or sell.
    pub side: TradeSide,
    /// Asset to trade.
    pub symbol: AssetSymbol,
    /// Raw amount text.
    pub amount_input: String,
}

impl TradeTicket {
    /// Creates new ticket.
    #[must_use]
    pub fn new(side: TradeSide, symbol: AssetSymbol, amount_input: impl Into<String>) -> Self {
        Self {
            side,
            symbol,
            amount_input: amount_input.into(),
        }
    }

    /// Parses the amount, accepting a comma as decimal separator.
    ///
    /// # Errors
    /// Returns error if the text is not a number.
    pub fn amount(&self) -> Result<f64, TradeError> {
        let normalized = self.amount_input.trim().replace(',', ".");
        normalized
            .parse::<f64>()
            .map_err(|_| TradeError::UnparseableAmount {
                input: self.amount_input.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(input: &str) -> TradeTicket {
        TradeTicket::new(TradeSide::Buy, AssetSymbol::new("SOL").unwrap(), input)
    }

    #[test]
    fn test_parses_decimal_comma() {
        let amount = ticket(" 1,5 ").amount().unwrap();
        assert!((amount - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_text() {
        assert!(matches!(
            ticket("abc").amount(),
            Err(TradeError::UnparseableAmount { .. })
        ));
        assert!(ticket("").amount().is_err());
    }
}
