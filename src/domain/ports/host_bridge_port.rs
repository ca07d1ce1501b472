//! Mini-App host bridge port definition.

use crate::domain::entities::TelegramId;

/// Runtime that hosts the client and supplies the user identity.
///
/// Mirrors the lifecycle hooks a Telegram Mini-App page gets from its host.
pub trait HostBridgePort: Send + Sync {
    /// Whether the client runs inside a real Mini-App host.
    fn is_inside_host(&self) -> bool;

    /// Identifier of the user who opened the app, if the host supplies one.
    fn user_id(&self) -> Option<TelegramId>;

    /// Tells the host the client finished loading.
    fn ready(&self);

    /// Asks the host to give the client its full viewport.
    fn expand(&self);

    /// Asks the host to confirm before closing the client.
    fn enable_closing_confirmation(&self);

    /// Whether closing requires confirmation.
    fn is_closing_confirmation_enabled(&self) -> bool;
}

/// Test double for the host bridge.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock host bridge recording lifecycle calls.
    #[derive(Default)]
    pub struct MockHostBridge {
        inside: bool,
        user_id: Option<TelegramId>,
        /// Times `ready` was called.
        pub ready_calls: AtomicUsize,
        /// Set by `expand`.
        pub expanded: AtomicBool,
        /// Set by `enable_closing_confirmation`.
        pub closing_confirmation: AtomicBool,
    }

    impl MockHostBridge {
        /// Creates a mock Telegram host.
        pub fn telegram(user_id: Option<u64>) -> Self {
            Self {
                inside: true,
                user_id: user_id.map(TelegramId),
                ..Self::default()
            }
        }

        /// Creates a mock standalone host.
        pub fn standalone(user_id: Option<u64>) -> Self {
            Self {
                inside: false,
                user_id: user_id.map(TelegramId),
                ..Self::default()
            }
        }
    }

    impl HostBridgePort for MockHostBridge {
        fn is_inside_host(&self) -> bool {
            self.inside
        }

        fn user_id(&self) -> Option<TelegramId> {
            self.user_id
        }

        fn ready(&self) {
            self.ready_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn expand(&self) {
            self.expanded.store(true, Ordering::SeqCst);
        }

        fn enable_closing_confirmation(&self) {
            self.closing_confirmation.store(true, Ordering::SeqCst);
        }

        fn is_closing_confirmation_enabled(&self) -> bool {
            self.closing_confirmation.load(Ordering::SeqCst)
        }
    }
}
