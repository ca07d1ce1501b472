//! Mini-App host bridge adapters.

mod standalone;
mod telegram;

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::HostBridgePort;

pub use standalone::StandaloneHost;
pub use telegram::TelegramHost;

/// Picks the Telegram host when launch data is present and parseable.
#[must_use]
pub fn detect_host(init_data: Option<&str>) -> Arc<dyn HostBridgePort> {
    match init_data.map(str::trim).filter(|data| !data.is_empty()) {
        Some(data) => match TelegramHost::from_init_data(data) {
            Ok(host) => Arc::new(host),
            Err(e) => {
                warn!(error = %e, "Ignoring Mini-App launch data");
                Arc::new(StandaloneHost::new())
            }
        },
        None => Arc::new(StandaloneHost::new()),
    }
}
