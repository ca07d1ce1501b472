use serde::{Deserialize, Serialize};

use crate::domain::entities::{BalanceMap, TradeOutcome, TradeSide};

/// Trade endpoint response.
///
/// The backend answers `{success, message, new_balances}` on success and
/// `{error}` otherwise; both shapes decode into this struct.
#[derive(Debug, Deserialize)]
pub struct TradeResponse {
    /// Whether the trade was executed.
    #[serde(default)]
    pub success: bool,
    /// Confirmation text.
    #[serde(default)]
    pub message: Option<String>,
    /// Rejection reason.
    #[serde(default)]
    pub error: Option<String>,
    /// Balances after the trade.
    #[serde(default)]
    pub new_balances: BalanceMap,
}

impl TradeResponse {
    /// Converts into an outcome, or the rejection reason.
    pub fn into_outcome(self, side: TradeSide) -> Result<TradeOutcome, String> {
        if self.success {
            Ok(TradeOutcome {
                side,
                message: self
                    .message
                    .unwrap_or_else(|| format!("Successfully {}", side.past_tense())),
                new_balances: self.new_balances,
            })
        } else {
            Err(self
                .error
                .or(self.message)
                .unwrap_or_else(|| "Trade was not accepted".to_string()))
        }
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Reason given by the server.
    pub error: String,
}

/// Health endpoint response.
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the backend is up.
    pub status: String,
    /// Optional detail.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_payload() {
        let json = r#"{
            "success": true,
            "message": "Successfully bought 0.5 BTC",
            "new_balances": {"USD": 77500.0, "BTC": 0.5}
        }"#;
        let response: TradeResponse = serde_json::from_str(json).unwrap();

        let outcome = response.into_outcome(TradeSide::Buy).unwrap();

        assert_eq!(outcome.message, "Successfully bought 0.5 BTC");
        assert!((outcome.new_balances.cash() - 77500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_error_payload() {
        let response: TradeResponse =
            serde_json::from_str(r#"{"error": "Insufficient funds"}"#).unwrap();

        assert_eq!(
            response.into_outcome(TradeSide::Buy).unwrap_err(),
            "Insufficient funds"
        );
    }

    #[test]
    fn test_success_without_message() {
        let response: TradeResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let outcome = response.into_outcome(TradeSide::Sell).unwrap();
        assert_eq!(outcome.message, "Successfully sold");
    }
}
