//! Application configuration.

pub mod app_config;
/// Command line arguments.
pub mod args;
/// Persisted UI state.
pub mod state_config;
/// Config and state file storage.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use state_config::StateConfig;
pub use storage::{ConfigError, StorageManager};
