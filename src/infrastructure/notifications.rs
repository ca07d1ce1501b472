//! Desktop notifications for completed trades.

use std::sync::Arc;

use crate::domain::ports::NotificationPort;

const APP_NAME: &str = "CryptoPro";

#[cfg(feature = "notify")]
mod notify_impl {
    use super::{APP_NAME, NotificationPort};
    use notify_rust::Notification;
    use tracing::{debug, warn};

    /// Shows trade confirmations through the desktop notification daemon.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        /// Creates service; a disabled one drops every send.
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        /// Whether sends reach the desktop.
        #[must_use]
        pub fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn show(title: &str, body: &str) {
            if let Err(e) = Notification::new()
                .summary(title)
                .body(body)
                .appname(APP_NAME)
                .show()
            {
                warn!(error = %e, "Failed to show desktop notification");
            }
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, title: &str, body: &str) {
            if !self.enabled {
                return;
            }
            debug!(title, "Sending desktop notification");

            let title = title.to_string();
            let body = body.to_string();

            // D-Bus calls block; keep them off the async workers.
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn_blocking(move || Self::show(&title, &body));
                }
                Err(_) => Self::show(&title, &body),
            }
        }
    }
}

#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::NotificationPort;

    /// Desktop notifications compiled out; every send is dropped.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService;

    impl DesktopNotificationService {
        /// Creates service; the argument is ignored.
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self
        }

        /// Always `false`.
        #[must_use]
        pub fn is_enabled(&self) -> bool {
            false
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, _title: &str, _body: &str) {}
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;

/// Notifier to hand the app, or `None` when notifications are off or
/// compiled out.
#[must_use]
pub fn desktop_notifier(enabled: bool) -> Option<Arc<dyn NotificationPort>> {
    let service = DesktopNotificationService::new(enabled);
    service
        .is_enabled()
        .then(|| Arc::new(service) as Arc<dyn NotificationPort>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_service_is_silent() {
        let service = DesktopNotificationService::new(false);
        assert!(!service.is_enabled());
        service.send("CryptoPro", "Successfully bought 0.5 BTC");
    }

    #[test]
    fn test_no_notifier_when_disabled() {
        assert!(desktop_notifier(false).is_none());
    }

    #[cfg(feature = "notify")]
    #[test]
    fn test_notifier_when_enabled() {
        assert!(desktop_notifier(true).is_some());
    }

    #[cfg(not(feature = "notify"))]
    #[test]
    fn test_no_notifier_without_feature() {
        assert!(desktop_notifier(true).is_none());
    }
}
