mod footer_bar;
mod header_bar;
mod history_table;
mod input;
mod market_table;
mod status_bar;
mod summary_card;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{ApiStatus, HeaderBar, HeaderBarStyle};
pub use history_table::HistoryTable;
pub use input::AmountInput;
pub use market_table::MarketTable;
pub use status_bar::{StatusBar, StatusLevel};
pub use summary_card::SummaryCard;
