use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments; each overrides the matching config entry.
#[derive(Debug, Parser)]
#[command(
    name = "cryptopro",
    version,
    about = "Terminal client for the CryptoPro paper-trading portfolio",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the CryptoPro API.
    #[arg(long, value_name = "URL", env = "CRYPTOPRO_API_URL")]
    pub api_url: Option<String>,

    /// Telegram user id to use outside the Mini-App host.
    #[arg(short, long, value_name = "ID")]
    pub user_id: Option<u64>,

    /// Raw Telegram `initData` launch string.
    #[arg(long, value_name = "QUERY", env = "TELEGRAM_INIT_DATA", hide_env_values = true)]
    pub init_data: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Seconds between market refreshes (0 disables).
    #[arg(long, value_name = "SECS")]
    pub refresh_interval: Option<u64>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Mirror trade results as desktop notifications.
    #[arg(long)]
    pub desktop_notifications: Option<bool>,
}
