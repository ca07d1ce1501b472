//! Session start use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::Session;
use crate::domain::entities::TelegramId;
use crate::domain::ports::HostBridgePort;

/// Connects to the Mini-App host and resolves the user identity.
pub struct StartSessionUseCase {
    host: Arc<dyn HostBridgePort>,
    fallback_user_id: Option<TelegramId>,
}

impl StartSessionUseCase {
    /// Creates new use case.
    ///
    /// `fallback_user_id` is used only when running outside a host.
    #[must_use]
    pub const fn new(host: Arc<dyn HostBridgePort>, fallback_user_id: Option<TelegramId>) -> Self {
        Self {
            host,
            fallback_user_id,
        }
    }

    /// Signals readiness to the host and returns the session identity.
    pub fn execute(&self) -> Session {
        if self.host.is_inside_host() {
            self.host.ready();
            self.host.expand();
            self.host.enable_closing_confirmation();

            let telegram_id = self.host.user_id();
            match telegram_id {
                Some(id) => info!(telegram_id = %id, "Telegram user ID"),
                None => warn!("Telegram host did not supply a user"),
            }
            return Session::new(telegram_id, true);
        }

        info!("Running outside Telegram");
        let telegram_id = self.host.user_id().or(self.fallback_user_id);
        debug!(telegram_id = ?telegram_id, "Using standalone identity");
        Session::new(telegram_id, false)
    }
}
