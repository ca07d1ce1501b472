//! Trade submission use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{Session, TradeTicket};
use crate::domain::entities::{PriceMap, TradeOutcome, TradeRequest};
use crate::domain::errors::{ApiError, TradeError};
use crate::domain::ports::{NotificationPort, PortfolioPort};

/// Validates a trade ticket and submits it at the current market price.
#[derive(Clone)]
pub struct SubmitTradeUseCase {
    portfolio: Arc<dyn PortfolioPort>,
    notifier: Option<Arc<dyn NotificationPort>>,
}

impl SubmitTradeUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(
        portfolio: Arc<dyn PortfolioPort>,
        notifier: Option<Arc<dyn NotificationPort>>,
    ) -> Self {
        Self {
            portfolio,
            notifier,
        }
    }

    /// Executes the trade.
    ///
    /// # Errors
    /// Returns error if the ticket is invalid, no price is known for the
    /// asset, or the backend rejects the order.
    pub async fn execute(
        &self,
        ticket: &TradeTicket,
        session: &Session,
        prices: &PriceMap,
    ) -> Result<TradeOutcome, TradeError> {
        let telegram_id = session.telegram_id.ok_or(ApiError::MissingUserId)?;
        let amount = ticket.amount()?;
        let price = prices
            .price(&ticket.symbol)
            .ok_or_else(|| TradeError::NoMarketPrice {
                symbol: ticket.symbol.to_string(),
            })?;

        let request = TradeRequest::new(
            ticket.side,
            telegram_id,
            ticket.symbol.clone(),
            amount,
            price,
        )?;

        debug!(
            side = %request.side,
            crypto = %request.crypto,
            amount = request.amount,
            price = request.price,
            "Submitting trade"
        );

        match self.portfolio.submit_trade(&request).await {
            Ok(outcome) => {
                info!(
                    side = %request.side,
                    crypto = %request.crypto,
                    notional = request.notional(),
                    "Trade executed"
                );
                if let Some(notifier) = &self.notifier {
                    notifier.send("CryptoPro", &outcome.message);
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, side = %request.side, "Trade failed");
                Err(e.into())
            }
        }
    }
}
