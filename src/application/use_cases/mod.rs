//! Use case implementations.

mod load_account_use_case;
mod load_market_use_case;
mod load_transactions_use_case;
mod start_session_use_case;
mod submit_trade_use_case;

pub use load_account_use_case::LoadAccountUseCase;
pub use load_market_use_case::LoadMarketUseCase;
pub use load_transactions_use_case::LoadTransactionsUseCase;
pub use start_session_use_case::StartSessionUseCase;
pub use submit_trade_use_case::SubmitTradeUseCase;
