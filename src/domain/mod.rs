//! Domain layer with core business entities and port definitions.

/// Blocking alert definitions.
pub mod alert;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use alert::{Alert, AlertLevel};
pub use entities::{Account, AssetSymbol, BalanceMap, PriceMap, TelegramId};
pub use errors::{ApiError, HostError, TradeError};
pub use ports::{HostBridgePort, NotificationPort, PortfolioPort};
