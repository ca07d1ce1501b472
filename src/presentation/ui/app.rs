//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, error, info, warn};

use super::backend::{Action, Backend, BackendCommand};
use super::{
    AlertPopup, ConfirmPopup, PortfolioScreen, PortfolioScreenState, TradeDialog,
    TradeDialogAction, TradeDialogState,
};
use crate::application::dto::Session;
use crate::application::services::AlertQueue;
use crate::domain::entities::{AssetSymbol, TradeSide};
use crate::domain::keybinding::{Action as KeyAction, Keymap};
use crate::domain::ports::{HostBridgePort, NotificationPort, PortfolioPort};
use crate::infrastructure::config::{AppConfig, StateConfig, StorageManager};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{ApiStatus, StatusBar};

const CLOSE_PROMPT: &str = "Close CryptoPro?";
const USER_LOAD_FAILED: &str = "Failed to load user data";
const HISTORY_LOAD_FAILED: &str = "Failed to load transaction history";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    ConfirmingExit,
    Exiting,
}

/// Terminal application: owns UI state and talks to the backend worker.
pub struct App {
    state: AppState,
    session: Session,
    host: Arc<dyn HostBridgePort>,
    portfolio: Arc<dyn PortfolioPort>,
    notifier: Option<Arc<dyn NotificationPort>>,
    screen: PortfolioScreenState,
    trade_dialog: Option<TradeDialogState>,
    alerts: AlertQueue,
    keymap: Keymap,
    theme: Theme,
    timestamp_format: String,
    refresh_interval: Option<Duration>,
    storage: Option<StorageManager>,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    command_rx: Option<mpsc::UnboundedReceiver<BackendCommand>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Creates app and starts no work until `run`.
    #[must_use]
    pub fn new(
        portfolio: Arc<dyn PortfolioPort>,
        host: Arc<dyn HostBridgePort>,
        notifier: Option<Arc<dyn NotificationPort>>,
        session: Session,
        config: &AppConfig,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            session,
            host,
            portfolio,
            notifier,
            screen: PortfolioScreenState::new(&session),
            trade_dialog: None,
            alerts: AlertQueue::new(),
            keymap: Keymap::with_overrides(&config.keybindings),
            theme: Theme::new(&config.theme.accent_color),
            timestamp_format: config.ui.timestamp_format.clone(),
            refresh_interval: config.ui.refresh_interval(),
            storage: None,
            command_tx,
            command_rx: Some(command_rx),
            action_tx,
            action_rx,
        }
    }

    /// Persists the selected asset and panels across runs.
    #[must_use]
    pub fn with_storage(mut self, storage: StorageManager) -> Self {
        match storage.load_state() {
            Ok(state) => {
                let symbol = state.last_symbol.as_deref().and_then(AssetSymbol::new);
                self.screen = PortfolioScreenState::new(&self.session)
                    .with_restored(symbol, state.show_history);
            }
            Err(e) => warn!(error = %e, "Failed to load saved state"),
        }
        self.storage = Some(storage);
        self
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if let Some(command_rx) = self.command_rx.take() {
            let backend = Backend::new(
                Arc::clone(&self.portfolio),
                self.notifier.clone(),
                self.session,
                command_rx,
                self.action_tx.clone(),
            );
            tokio::spawn(backend.run());
        }

        self.load_initial_data();
        self.run_event_loop(terminal).await?;
        self.save_state();

        info!("Application exiting normally");
        Ok(())
    }

    fn load_initial_data(&mut self) {
        self.send(BackendCommand::LoadAccount);
        self.send(BackendCommand::LoadMarket);
        self.send(BackendCommand::HealthCheck);
        if self.screen.is_history_shown() {
            self.send(BackendCommand::LoadTransactions);
        }
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut refresh = self.refresh_interval.map(|period| {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer
        });

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let refresh_tick = match refresh.as_mut() {
                Some(timer) => Either::Left(timer.tick()),
                None => Either::Right(std::future::pending::<Instant>()),
            };

            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(event) = terminal_events.next() => {
                    match event {
                        Ok(Event::Key(key)) => {
                            if self.handle_key(key) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!(error = %e, "Terminal event stream failed");
                            self.state = AppState::Exiting;
                        }
                    }
                }

                _ = refresh_tick => {
                    debug!("Periodic market refresh");
                    self.send(BackendCommand::LoadMarket);
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn send(&self, command: BackendCommand) {
        if self.command_tx.send(command).is_err() {
            warn!("Backend worker is gone, command dropped");
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let modal_open = self.trade_dialog.is_some()
            || self.state == AppState::ConfirmingExit
            || self.alerts.is_blocking();
        frame.render_stateful_widget(
            PortfolioScreen::new(&self.keymap, &self.theme, &self.timestamp_format)
                .focused(!modal_open),
            area,
            &mut self.screen,
        );

        if let Some(dialog) = self.trade_dialog.as_mut() {
            frame.render_stateful_widget(TradeDialog::new(&self.theme), area, dialog);
        }

        if self.state == AppState::ConfirmingExit {
            frame.render_widget(ConfirmPopup::new(CLOSE_PROMPT, &self.theme), area);
        }

        if let Some(alert) = self.alerts.current() {
            frame.render_widget(
                AlertPopup::new(alert, &self.theme).pending(self.alerts.len() - 1),
                area,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }

        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.alerts.is_blocking() {
            if EventHandler::is_dismiss_event(&key) {
                self.alerts.dismiss();
            }
            return EventResult::Consumed;
        }

        if self.state == AppState::ConfirmingExit {
            if EventHandler::is_confirm_event(&key) {
                return EventResult::Exit;
            }
            if EventHandler::is_cancel_event(&key) {
                self.state = AppState::Running;
            }
            return EventResult::Consumed;
        }

        if let Some(dialog) = self.trade_dialog.as_mut() {
            match dialog.handle_key(key) {
                TradeDialogAction::Submit(ticket) => {
                    self.screen.set_status(StatusBar::info(format!(
                        "Submitting {} order for {}…",
                        ticket.side, ticket.symbol
                    )));
                    self.send(BackendCommand::SubmitTrade {
                        ticket,
                        prices: self.screen.prices().clone(),
                    });
                }
                TradeDialogAction::Cancel => self.trade_dialog = None,
                TradeDialogAction::None => {}
            }
            return EventResult::Consumed;
        }

        let Some(action) = self.keymap.action_for(&key) else {
            return EventResult::Continue;
        };

        match action {
            KeyAction::Quit => return self.request_quit(),
            KeyAction::Refresh => {
                self.screen.set_status(StatusBar::info("Refreshing…"));
                self.send(BackendCommand::LoadAccount);
                self.send(BackendCommand::LoadMarket);
                if self.screen.is_history_shown() {
                    self.send(BackendCommand::LoadTransactions);
                }
            }
            KeyAction::Buy => self.open_trade_dialog(TradeSide::Buy),
            KeyAction::Sell => self.open_trade_dialog(TradeSide::Sell),
            KeyAction::ToggleHistory => {
                if self.screen.toggle_history() {
                    self.send(BackendCommand::LoadTransactions);
                }
            }
            KeyAction::NavigateUp => self.screen.select_previous(),
            KeyAction::NavigateDown => self.screen.select_next(),
            KeyAction::SelectFirst => self.screen.select_first(),
            KeyAction::SelectLast => self.screen.select_last(),
        }

        EventResult::Consumed
    }

    fn request_quit(&mut self) -> EventResult {
        if self.host.is_closing_confirmation_enabled() {
            self.state = AppState::ConfirmingExit;
            EventResult::Consumed
        } else {
            EventResult::Exit
        }
    }

    fn open_trade_dialog(&mut self, side: TradeSide) {
        let Some(row) = self.screen.selected_row() else {
            self.screen
                .set_status(StatusBar::warning("No market data to trade yet"));
            return;
        };
        let Some(price) = self.screen.prices().price(&row.symbol) else {
            return;
        };

        let (holding, cash) = self.screen.account().map_or((0.0, 0.0), |account| {
            (account.balances.get(&row.symbol), account.available())
        });

        debug!(side = %side, symbol = %row.symbol, "Opening trade dialog");
        self.trade_dialog = Some(TradeDialogState::new(
            side,
            row.symbol.clone(),
            row.name.clone(),
            price,
            holding,
            cash,
        ));
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::AccountLoaded(account) => {
                debug!(total_value = account.total_value, "Account loaded");
                self.screen.set_account(account);
                self.screen.set_status(
                    StatusBar::success("Portfolio updated")
                        .right(Local::now().format("%H:%M:%S").to_string()),
                );
            }
            Action::AccountLoadFailed(e) => {
                error!(error = %e, "Error loading user data");
                if e.is_network_error() {
                    self.screen.set_api_status(ApiStatus::Offline);
                }
                self.screen.set_status(StatusBar::error(USER_LOAD_FAILED));
                self.alerts.error(USER_LOAD_FAILED);
            }
            Action::MarketLoaded(Some(prices)) => {
                if let Some(dialog) = self.trade_dialog.as_mut()
                    && let Some(price) = prices.price(dialog.symbol())
                {
                    dialog.set_price(price);
                }
                self.screen.set_prices(prices);
            }
            Action::MarketLoaded(None) => {}
            Action::TradeCompleted(outcome) => {
                info!(side = %outcome.side, "Trade completed");
                self.trade_dialog = None;
                self.screen.apply_trade_balances(&outcome.new_balances);
                self.screen.set_status(StatusBar::success(outcome.message.clone()));
                self.alerts.success(outcome.message);
                self.send(BackendCommand::LoadAccount);
                if self.screen.is_history_shown() {
                    self.send(BackendCommand::LoadTransactions);
                }
            }
            Action::TradeFailed(e) => {
                if let Some(dialog) = self.trade_dialog.as_mut() {
                    dialog.submission_failed();
                }
                self.screen.set_status(StatusBar::error("Trade failed"));
                self.alerts.error(e.user_message());
            }
            Action::TransactionsLoaded(transactions) => {
                self.screen.set_transactions(transactions);
            }
            Action::TransactionsLoadFailed(e) => {
                self.alerts
                    .error(format!("{HISTORY_LOAD_FAILED}: {}", e.user_message()));
            }
            Action::HealthChecked { online } => {
                self.screen.set_api_status(if online {
                    ApiStatus::Online
                } else {
                    ApiStatus::Offline
                });
            }
        }
    }

    fn save_state(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let state = StateConfig {
            last_symbol: self.screen.selected_symbol().map(ToString::to_string),
            show_history: self.screen.is_history_shown(),
        };
        if let Err(e) = storage.save_state(&state) {
            warn!(error = %e, "Failed to save state");
        }
    }
}
