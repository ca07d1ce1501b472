//! Infrastructure layer with external service adapters.

/// CryptoPro HTTP API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Mini-App host bridges.
pub mod host;
/// Desktop notifications.
pub mod notifications;

pub use api::PortfolioClient;
pub use config::{AppConfig, CliArgs, LogLevel, StateConfig, StorageManager};
pub use host::{StandaloneHost, TelegramHost, detect_host};
pub use notifications::{DesktopNotificationService, desktop_notifier};
