//! Account loading use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::Session;
use crate::domain::entities::Account;
use crate::domain::errors::ApiError;
use crate::domain::ports::PortfolioPort;

/// Loads the session user's balances and total value.
#[derive(Clone)]
pub struct LoadAccountUseCase {
    portfolio: Arc<dyn PortfolioPort>,
}

impl LoadAccountUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(portfolio: Arc<dyn PortfolioPort>) -> Self {
        Self { portfolio }
    }

    /// # Errors
    /// Returns error if the session has no user or the request fails.
    pub async fn execute(&self, session: &Session) -> Result<Account, ApiError> {
        let telegram_id = session.telegram_id.ok_or(ApiError::MissingUserId)?;

        debug!(telegram_id = %telegram_id, "Loading user data");

        let account = self
            .portfolio
            .fetch_account(telegram_id)
            .await
            .inspect_err(|e| warn!(error = %e, "Error loading user data"))?;

        debug!(
            total_value = account.total_value,
            assets = account.balances.len(),
            "User data loaded"
        );
        Ok(account)
    }
}
