use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::{Session, TradeTicket};
use crate::application::use_cases::{
    LoadAccountUseCase, LoadMarketUseCase, LoadTransactionsUseCase, SubmitTradeUseCase,
};
use crate::domain::entities::{Account, PriceMap, TradeOutcome, Transaction};
use crate::domain::errors::{ApiError, TradeError};
use crate::domain::ports::{NotificationPort, PortfolioPort};

/// Result of a backend command, fed back into the UI.
#[derive(Debug)]
pub enum Action {
    /// Account fetched.
    AccountLoaded(Account),
    /// Account fetch failed.
    AccountLoadFailed(ApiError),
    /// Fresh prices; `None` when the fetch failed and the old prices stay.
    MarketLoaded(Option<PriceMap>),
    /// Trade accepted.
    TradeCompleted(TradeOutcome),
    /// Trade rejected or not sent.
    TradeFailed(TradeError),
    /// History fetched.
    TransactionsLoaded(Vec<Transaction>),
    /// History fetch failed.
    TransactionsLoadFailed(ApiError),
    /// Health check result.
    HealthChecked {
        /// Whether the backend answered `ok`.
        online: bool,
    },
}

/// Work for the backend worker.
#[derive(Debug)]
pub enum BackendCommand {
    /// Fetch the session user's account.
    LoadAccount,
    /// Fetch market prices.
    LoadMarket,
    /// Fetch the session user's history.
    LoadTransactions,
    /// Validate and submit an order.
    SubmitTrade {
        /// Order as entered.
        ticket: TradeTicket,
        /// Prices the order is valued at.
        prices: PriceMap,
    },
    /// Call the health endpoint.
    HealthCheck,
}

#[derive(Clone)]
struct Services {
    session: Session,
    portfolio: Arc<dyn PortfolioPort>,
    load_account: LoadAccountUseCase,
    load_market: LoadMarketUseCase,
    load_transactions: LoadTransactionsUseCase,
    submit_trade: SubmitTradeUseCase,
}

impl Services {
    async fn handle_command(&self, command: BackendCommand) -> Action {
        match command {
            BackendCommand::LoadAccount => match self.load_account.execute(&self.session).await {
                Ok(account) => Action::AccountLoaded(account),
                Err(e) => Action::AccountLoadFailed(e),
            },
            BackendCommand::LoadMarket => Action::MarketLoaded(self.load_market.execute().await),
            BackendCommand::LoadTransactions => {
                match self.load_transactions.execute(&self.session).await {
                    Ok(transactions) => Action::TransactionsLoaded(transactions),
                    Err(e) => {
                        warn!(error = %e, "Failed to load transactions");
                        Action::TransactionsLoadFailed(e)
                    }
                }
            }
            BackendCommand::SubmitTrade { ticket, prices } => {
                match self.submit_trade.execute(&ticket, &self.session, &prices).await {
                    Ok(outcome) => Action::TradeCompleted(outcome),
                    Err(e) => Action::TradeFailed(e),
                }
            }
            BackendCommand::HealthCheck => {
                let online = match self.portfolio.health_check().await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = %e, "Health check failed");
                        false
                    }
                };
                Action::HealthChecked { online }
            }
        }
    }
}

/// Worker owning the portfolio port.
///
/// Each command runs in its own task, so results arrive in completion order.
pub struct Backend {
    services: Services,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Backend {
    /// Creates worker over the given channels.
    pub fn new(
        portfolio: Arc<dyn PortfolioPort>,
        notifier: Option<Arc<dyn NotificationPort>>,
        session: Session,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let services = Services {
            session,
            load_account: LoadAccountUseCase::new(Arc::clone(&portfolio)),
            load_market: LoadMarketUseCase::new(Arc::clone(&portfolio)),
            load_transactions: LoadTransactionsUseCase::new(Arc::clone(&portfolio)),
            submit_trade: SubmitTradeUseCase::new(Arc::clone(&portfolio), notifier),
            portfolio,
        };

        Self {
            services,
            command_rx,
            action_tx,
        }
    }

    /// Serves commands until the sender is dropped.
    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            debug!(command = ?command, "Backend command");
            let services = self.services.clone();
            let action_tx = self.action_tx.clone();
            tokio::spawn(async move {
                let action = services.handle_command(command).await;
                let _ = action_tx.send(action);
            });
        }
        info!("Backend worker stopped");
    }
}
