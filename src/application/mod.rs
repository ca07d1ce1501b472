//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{MarketRow, PortfolioSummary, Session, TradeTicket};
pub use use_cases::{
    LoadAccountUseCase, LoadMarketUseCase, LoadTransactionsUseCase, StartSessionUseCase,
    SubmitTradeUseCase,
};
