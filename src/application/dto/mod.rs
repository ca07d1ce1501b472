//! Data transfer objects.

mod portfolio_dto;
mod session_dto;
mod trade_dto;

pub use portfolio_dto::{MarketRow, PortfolioSummary, build_market_rows};
pub use session_dto::Session;
pub use trade_dto::TradeTicket;
