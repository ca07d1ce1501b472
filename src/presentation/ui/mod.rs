//! UI screens.

mod alert_popup;
mod app;
/// Background worker talking to the backend.
pub mod backend;
mod portfolio_screen;
mod trade_dialog;
mod utils;

pub use alert_popup::{AlertPopup, ConfirmPopup};
pub use app::App;
pub use portfolio_screen::{PortfolioScreen, PortfolioScreenState};
pub use trade_dialog::{TradeDialog, TradeDialogAction, TradeDialogState};
pub use utils::centered_rect;
