//! Application configuration.

use crate::domain::entities::TelegramId;
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub(super) const APP_NAME: &str = "cryptopro";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "cryptopro";

/// User id assumed when running outside Telegram.
pub const DEFAULT_STANDALONE_USER_ID: u64 = 123_456_789;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Telegram Mini-App launch data; never written to disk.
    #[serde(skip)]
    pub init_data: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Base URL of the CryptoPro backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User to act as when running outside Telegram.
    #[serde(default = "default_user_id")]
    pub telegram_user_id: Option<u64>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Mirror trade results as desktop notifications.
    #[serde(default = "default_true")]
    pub enable_desktop_notifications: bool,

    /// Custom keybindings.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds between market refreshes; 0 disables.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Timestamp format string (chrono format) for the history panel.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl UiConfig {
    /// Returns the refresh period, `None` when disabled.
    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_user_id() -> Option<u64> {
    Some(DEFAULT_STANDALONE_USER_ID)
}

fn default_request_timeout() -> u64 {
    30
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(user_id) = args.user_id {
            self.telegram_user_id = Some(user_id);
        }
        if let Some(init_data) = args.init_data {
            self.init_data = Some(init_data);
        }
        if let Some(refresh) = args.refresh_interval {
            self.ui.refresh_interval_secs = refresh;
        }
        if let Some(notifications) = args.desktop_notifications {
            self.enable_desktop_notifications = notifications;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns the fallback identity for standalone runs.
    #[must_use]
    pub fn standalone_user_id(&self) -> Option<TelegramId> {
        self.telegram_user_id.map(TelegramId)
    }

    /// Returns the HTTP timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cryptopro.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            init_data: None,
            log_level: LogLevel::Info,
            api_url: default_api_url(),
            telegram_user_id: default_user_id(),
            request_timeout_secs: default_request_timeout(),
            enable_desktop_notifications: true,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            api_url = "https://cryptopro.example.com"
            telegram_user_id = 42

            [ui]
            refresh_interval_secs = 0

            [keybindings]
            "Ctrl+r" = "Refresh"
            "F2" = "Buy"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_url, "https://cryptopro.example.com");
        assert_eq!(config.standalone_user_id(), Some(TelegramId(42)));
        assert!(config.ui.refresh_interval().is_none());
        assert_eq!(config.ui.timestamp_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.keybindings.get("Ctrl+r"), Some(&Action::Refresh));
        assert_eq!(config.keybindings.get("F2"), Some(&Action::Buy));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(
            config.standalone_user_id(),
            Some(TelegramId(DEFAULT_STANDALONE_USER_ID))
        );
        assert_eq!(config.ui.refresh_interval(), Some(Duration::from_secs(30)));
        assert!(config.keybindings.is_empty());
        assert!(config.init_data.is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "cryptopro",
            "--api-url",
            "http://10.0.0.2:5000",
            "--user-id",
            "7",
            "--refresh-interval",
            "5",
            "--init-data",
            "user=%7B%22id%22%3A1%7D",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.api_url, "http://10.0.0.2:5000");
        assert_eq!(config.standalone_user_id(), Some(TelegramId(7)));
        assert_eq!(config.ui.refresh_interval_secs, 5);
        assert_eq!(config.init_data.as_deref(), Some("user=%7B%22id%22%3A1%7D"));
    }

    #[test]
    fn test_init_data_never_serialized() {
        let config = AppConfig {
            init_data: Some("hash=secret".to_string()),
            ..AppConfig::default()
        };

        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(!rendered.contains("secret"));
    }
}
