//! Session DTOs.

use crate::domain::entities::TelegramId;

/// Identity the client acts as for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// User the requests are made for.
    pub telegram_id: Option<TelegramId>,
    /// Whether a Mini-App host supplied the identity.
    pub inside_host: bool,
}

impl Session {
    /// Creates new session.
    #[must_use]
    pub const fn new(telegram_id: Option<TelegramId>, inside_host: bool) -> Self {
        Self {
            telegram_id,
            inside_host,
        }
    }

    /// Returns the host description.
    #[must_use]
    pub const fn host_description(&self) -> &'static str {
        if self.inside_host {
            "Telegram"
        } else {
            "standalone"
        }
    }
}
