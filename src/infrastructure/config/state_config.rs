use serde::{Deserialize, Serialize};

/// Session state persisted between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Asset selected in the market list when the app last closed.
    #[serde(default)]
    pub last_symbol: Option<String>,

    /// Whether the history panel was open.
    #[serde(default)]
    pub show_history: bool,
}
