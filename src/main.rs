use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cryptopro::application::StartSessionUseCase;
use cryptopro::infrastructure::config::ConfigError;
use cryptopro::infrastructure::{
    AppConfig, CliArgs, PortfolioClient, StorageManager, desktop_notifier, detect_host,
};
use cryptopro::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

/// Reads the config file and layers the command line on top.
///
/// Logging is not up yet, so a load failure is handed back for reporting.
fn load_config(args: CliArgs) -> (AppConfig, Option<StorageManager>, Option<ConfigError>) {
    let storage = match StorageManager::new() {
        Ok(storage) => storage,
        Err(e) => {
            let mut config = AppConfig::default();
            config.merge_with_args(args);
            return (config, None, Some(e));
        }
    };

    let (mut config, error) = match storage.load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    config.merge_with_args(args);

    (config, Some(storage), error)
}

fn create_app() -> Result<App> {
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let (config, storage, config_error) = load_config(args);

    init_logging(&config)?;

    info!(version = cryptopro::VERSION, "Starting CryptoPro");
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, running with defaults");
    }

    let portfolio = Arc::new(PortfolioClient::with_timeout(
        config.api_url.clone(),
        config.request_timeout(),
    )?);

    let host = detect_host(config.init_data.as_deref());
    let session =
        StartSessionUseCase::new(Arc::clone(&host), config.standalone_user_id()).execute();

    let notifier = desktop_notifier(config.enable_desktop_notifications);

    let app = App::new(portfolio, host, notifier, session, &config);
    Ok(match storage {
        Some(storage) => app.with_storage(storage),
        None => app,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
