//! Portfolio backend port definition.

use async_trait::async_trait;

use crate::domain::entities::{
    Account, PriceMap, TelegramId, TradeOutcome, TradeRequest, Transaction,
};
use crate::domain::errors::ApiError;

/// Port for the CryptoPro backend API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioPort: Send + Sync {
    /// Fetches the user's account with balances and total value.
    async fn fetch_account(&self, telegram_id: TelegramId) -> Result<Account, ApiError>;

    /// Fetches current market prices.
    async fn fetch_prices(&self) -> Result<PriceMap, ApiError>;

    /// Submits a buy or sell order.
    async fn submit_trade(&self, request: &TradeRequest) -> Result<TradeOutcome, ApiError>;

    /// Fetches the newest executed transactions of a user.
    async fn fetch_transactions(&self, telegram_id: TelegramId)
    -> Result<Vec<Transaction>, ApiError>;

    /// Checks backend availability.
    async fn health_check(&self) -> Result<(), ApiError>;
}
