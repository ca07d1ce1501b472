//! Domain error types.

mod api_error;
mod host_error;
mod trade_error;

pub use api_error::ApiError;
pub use host_error::HostError;
pub use trade_error::TradeError;
