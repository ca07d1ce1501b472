//! Mini-App host bridge error types.

use thiserror::Error;

#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum HostError {
    #[error("invalid Mini-App init data: {reason}")]
    InvalidInitData { reason: String },
}

impl HostError {
    /// Creates invalid launch data error.
    #[must_use]
    pub fn invalid_init_data(reason: impl Into<String>) -> Self {
        Self::InvalidInitData {
            reason: reason.into(),
        }
    }
}
