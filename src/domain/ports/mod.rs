mod host_bridge_port;
mod notification_port;
mod portfolio_port;

pub use host_bridge_port::HostBridgePort;
pub use notification_port::NotificationPort;
pub use portfolio_port::PortfolioPort;

#[cfg(test)]
pub use portfolio_port::MockPortfolioPort;

/// Hand-written test doubles.
#[cfg(test)]
pub mod mocks {
    pub use super::host_bridge_port::mock::MockHostBridge;
    pub use super::notification_port::mock::MockNotificationPort;
}
