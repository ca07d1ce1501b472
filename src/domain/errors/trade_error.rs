//! Trade submission error types.

use thiserror::Error;

use super::ApiError;

#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum TradeError {
    #[error("Enter a positive amount (got {amount})")]
    InvalidAmount { amount: f64 },

    #[error("Not a number: {input:?}")]
    UnparseableAmount { input: String },

    #[error("No valid price for {symbol} (got {price})")]
    InvalidPrice { symbol: String, price: f64 },

    #[error("No market price for {symbol}")]
    NoMarketPrice { symbol: String },

    #[error("USD cannot be traded against itself")]
    CashNotTradable,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TradeError {
    /// Text to show in the trade failure alert.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err: TradeError = ApiError::rejected(400, "Insufficient crypto balance").into();
        assert_eq!(err.user_message(), "Insufficient crypto balance");
    }

    #[test]
    fn test_validation_message() {
        let err = TradeError::NoMarketPrice {
            symbol: "DOT".to_string(),
        };
        assert_eq!(err.user_message(), "No market price for DOT");
    }
}
