//! Transaction history use case.

use std::sync::Arc;

use tracing::debug;

use crate::application::dto::Session;
use crate::domain::entities::Transaction;
use crate::domain::errors::ApiError;
use crate::domain::ports::PortfolioPort;

/// Loads the newest executed trades of the session user.
#[derive(Clone)]
pub struct LoadTransactionsUseCase {
    portfolio: Arc<dyn PortfolioPort>,
}

impl LoadTransactionsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(portfolio: Arc<dyn PortfolioPort>) -> Self {
        Self { portfolio }
    }

    /// Returns transactions newest first.
    ///
    /// # Errors
    /// Returns error if the session has no user or the request fails.
    pub async fn execute(&self, session: &Session) -> Result<Vec<Transaction>, ApiError> {
        let telegram_id = session.telegram_id.ok_or(ApiError::MissingUserId)?;

        let mut transactions = self.portfolio.fetch_transactions(telegram_id).await?;
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug!(count = transactions.len(), "Transaction history loaded");
        Ok(transactions)
    }
}
