//! Domain entity definitions.

mod account;
mod asset;
mod market;
mod trade;
mod transaction;

pub use account::{Account, BalanceMap, TelegramId};
pub use asset::AssetSymbol;
pub use market::{MarketQuote, PriceMap};
pub use trade::{TradeOutcome, TradeRequest, TradeSide};
pub use transaction::{Transaction, TransactionKind};
