use tracing::debug;

use crate::domain::entities::TelegramId;
use crate::domain::ports::HostBridgePort;

/// Host used when the client is launched outside Telegram.
#[derive(Debug, Default)]
pub struct StandaloneHost;

impl StandaloneHost {
    /// Creates host for the given user.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HostBridgePort for StandaloneHost {
    fn is_inside_host(&self) -> bool {
        false
    }

    fn user_id(&self) -> Option<TelegramId> {
        None
    }

    fn ready(&self) {
        debug!("No host to notify");
    }

    fn expand(&self) {}

    fn enable_closing_confirmation(&self) {}

    fn is_closing_confirmation_enabled(&self) -> bool {
        false
    }
}
