//! Backend API error types.

use thiserror::Error;

use crate::domain::entities::TelegramId;

/// Errors talking to the portfolio backend.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("No Telegram user ID")]
    MissingUserId,

    #[error("user {telegram_id} not found")]
    UserNotFound { telegram_id: TelegramId },

    #[error("request rejected with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out")]
    Timeout,

    #[error("invalid response from server: {message}")]
    InvalidResponse { message: String },

    #[error("unexpected API error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout)
    }

    /// Text to show the user; server-provided reasons are passed through.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::UserNotFound { .. } => "User not found".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_id_message() {
        assert_eq!(ApiError::MissingUserId.to_string(), "No Telegram user ID");
    }

    #[test]
    fn test_user_message_passes_server_reason() {
        let err = ApiError::rejected(400, "Insufficient funds");
        assert_eq!(err.user_message(), "Insufficient funds");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_network_classification() {
        assert!(ApiError::Timeout.is_network_error());
        assert!(ApiError::network("refused").is_network_error());
        assert!(!ApiError::rejected(500, "boom").is_network_error());
    }
}
