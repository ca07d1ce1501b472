//! Market data loading use case.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::entities::PriceMap;
use crate::domain::ports::PortfolioPort;

/// Loads market prices. Failures are logged and never surfaced.
#[derive(Clone)]
pub struct LoadMarketUseCase {
    portfolio: Arc<dyn PortfolioPort>,
}

impl LoadMarketUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(portfolio: Arc<dyn PortfolioPort>) -> Self {
        Self { portfolio }
    }

    /// Returns `None` when prices could not be loaded.
    pub async fn execute(&self) -> Option<PriceMap> {
        match self.portfolio.fetch_prices().await {
            Ok(prices) => {
                debug!(count = prices.len(), "Market data loaded");
                Some(prices)
            }
            Err(e) => {
                error!(error = %e, "Error loading market data");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AssetSymbol, MarketQuote};
    use crate::domain::errors::ApiError;
    use crate::domain::ports::MockPortfolioPort;

    #[tokio::test]
    async fn test_returns_prices() {
        let mut port = MockPortfolioPort::new();
        port.expect_fetch_prices().times(1).returning(|| {
            Ok([(AssetSymbol::new("BTC").unwrap(), MarketQuote::new("Bitcoin", 45000.0))]
                .into_iter()
                .collect())
        });

        let prices = LoadMarketUseCase::new(Arc::new(port)).execute().await;

        assert_eq!(prices.map(|p| p.len()), Some(1));
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let mut port = MockPortfolioPort::new();
        port.expect_fetch_prices()
            .returning(|| Err(ApiError::network("connection refused")));

        let prices = LoadMarketUseCase::new(Arc::new(port)).execute().await;
        assert!(prices.is_none());
    }
}
