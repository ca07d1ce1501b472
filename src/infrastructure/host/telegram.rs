//! Telegram Mini-App host built from launch `initData`.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::entities::TelegramId;
use crate::domain::errors::HostError;
use crate::domain::ports::HostBridgePort;

/// The part of Telegram's `user` object this client reads.
#[derive(Debug, Deserialize)]
struct WebAppUser {
    id: u64,
}

#[derive(Debug, Default)]
struct Lifecycle {
    ready: bool,
    expanded: bool,
    closing_confirmation: bool,
}

/// Host bridge backed by Telegram launch parameters.
#[derive(Debug)]
pub struct TelegramHost {
    user_id: Option<TelegramId>,
    lifecycle: Mutex<Lifecycle>,
}

impl TelegramHost {
    /// Parses the URL-encoded launch string
    /// (`query_id=..&user=..&auth_date=..&hash=..`).
    ///
    /// A missing or malformed `user` field leaves the host without a user.
    ///
    /// # Errors
    /// Returns error if the string is not a query string.
    pub fn from_init_data(init_data: &str) -> Result<Self, HostError> {
        let init_data = init_data.trim().trim_start_matches('?');
        if init_data.is_empty() {
            return Err(HostError::invalid_init_data("empty launch data"));
        }
        if !init_data.contains('=') {
            return Err(HostError::invalid_init_data("expected key=value pairs"));
        }

        let mut url = Url::parse("https://web.telegram.org/")
            .map_err(|e| HostError::invalid_init_data(e.to_string()))?;
        url.set_query(Some(init_data));

        let mut user_id = None;
        let mut auth_date: Option<DateTime<Utc>> = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "user" => match serde_json::from_str::<WebAppUser>(&value) {
                    Ok(parsed) => user_id = Some(TelegramId(parsed.id)),
                    Err(e) => warn!(error = %e, "Malformed user in launch data"),
                },
                "auth_date" => {
                    auth_date = value
                        .parse::<i64>()
                        .ok()
                        .and_then(|secs| DateTime::from_timestamp(secs, 0));
                }
                _ => {}
            }
        }

        debug!(user_id = ?user_id, auth_date = ?auth_date, "Parsed Mini-App launch data");

        Ok(Self {
            user_id,
            lifecycle: Mutex::new(Lifecycle::default()),
        })
    }
}

impl HostBridgePort for TelegramHost {
    fn is_inside_host(&self) -> bool {
        true
    }

    fn user_id(&self) -> Option<TelegramId> {
        self.user_id
    }

    fn ready(&self) {
        let mut lifecycle = self.lifecycle.lock();
        if !lifecycle.ready {
            lifecycle.ready = true;
            info!("Mini-App ready");
        }
    }

    fn expand(&self) {
        let mut lifecycle = self.lifecycle.lock();
        if !lifecycle.expanded {
            lifecycle.expanded = true;
            debug!("Mini-App expanded");
        }
    }

    fn enable_closing_confirmation(&self) {
        self.lifecycle.lock().closing_confirmation = true;
    }

    fn is_closing_confirmation_enabled(&self) -> bool {
        self.lifecycle.lock().closing_confirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INIT_DATA: &str = "query_id=AAHdF6IQAAAAAN0XohDhrOrc&user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Vladislav%22%2C%22username%22%3A%22vdkfrost%22%2C%22language_code%22%3A%22ru%22%7D&auth_date=1662771648&hash=c501b71e775f74ce10e377dea85a7ea24ecd640b223ea86dfe453e0eaed2e2b2";

    #[test]
    fn test_parses_user() {
        let host = TelegramHost::from_init_data(INIT_DATA).unwrap();

        assert_eq!(host.user_id(), Some(TelegramId(279_058_397)));
    }

    #[test]
    fn test_malformed_user_means_no_user() {
        let host = TelegramHost::from_init_data("user=%7Bnot-json&hash=abc").unwrap();
        assert!(host.user_id().is_none());
        assert!(host.is_inside_host());
    }

    #[test]
    fn test_missing_user() {
        let host = TelegramHost::from_init_data("query_id=1&auth_date=x").unwrap();
        assert!(host.user_id().is_none());
    }

    #[test]
    fn test_rejects_non_query() {
        assert!(TelegramHost::from_init_data("").is_err());
        assert!(TelegramHost::from_init_data("just-a-token").is_err());
    }

    #[test]
    fn test_lifecycle_flags() {
        let host = TelegramHost::from_init_data(INIT_DATA).unwrap();
        assert!(!host.lifecycle.lock().ready);
        assert!(!host.is_closing_confirmation_enabled());

        host.ready();
        host.ready();
        host.expand();
        host.enable_closing_confirmation();

        let lifecycle = host.lifecycle.lock();
        assert!(lifecycle.ready);
        assert!(lifecycle.expanded);
        drop(lifecycle);
        assert!(host.is_closing_confirmation_enabled());
    }
}
