//! Asset symbol entity.

use serde::{Deserialize, Deserializer, Serialize};

/// Ticker symbol of a tradable asset or of the cash currency.
///
/// Symbols are normalized to upper case so that `btc` and `BTC` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AssetSymbol(String);

impl AssetSymbol {
    /// Symbol of the cash balance.
    pub const CASH: &'static str = "USD";

    /// Creates a symbol, trimming whitespace and upper-casing it.
    ///
    /// Returns `None` for empty or non-alphanumeric input.
    #[must_use]
    pub fn new(symbol: &str) -> Option<Self> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the cash symbol.
    #[must_use]
    pub fn cash() -> Self {
        Self(Self::CASH.to_string())
    }

    /// Ticker as written by the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this symbol denotes the cash balance.
    #[must_use]
    pub fn is_cash(&self) -> bool {
        self.0 == Self::CASH
    }

    /// Number of decimals used when showing a held quantity of this asset.
    #[must_use]
    pub fn display_precision(&self) -> usize {
        match self.0.as_str() {
            "BTC" => 6,
            "ADA" | "USDT" | "USD" => 2,
            _ => 4,
        }
    }
}

impl std::fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid asset symbol: {raw:?}")))
    }
}

impl std::str::FromStr for AssetSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| format!("invalid asset symbol: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case() {
        let symbol = AssetSymbol::new(" btc ").unwrap();
        assert_eq!(symbol.as_str(), "BTC");
        assert_eq!(symbol, AssetSymbol::new("BTC").unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(AssetSymbol::new("").is_none());
        assert!(AssetSymbol::new("BT C").is_none());
        assert!(AssetSymbol::new("../x").is_none());
    }

    #[test]
    fn test_cash() {
        assert!(AssetSymbol::cash().is_cash());
        assert!(!AssetSymbol::new("USDT").unwrap().is_cash());
    }

    #[test]
    fn test_precision() {
        assert_eq!(AssetSymbol::new("BTC").unwrap().display_precision(), 6);
        assert_eq!(AssetSymbol::new("ADA").unwrap().display_precision(), 2);
        assert_eq!(AssetSymbol::new("ETH").unwrap().display_precision(), 4);
        assert_eq!(AssetSymbol::new("XYZ").unwrap().display_precision(), 4);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let symbol: AssetSymbol = serde_json::from_str("\"eth\"").unwrap();
        assert_eq!(symbol.as_str(), "ETH");
        assert!(serde_json::from_str::<AssetSymbol>("\"\"").is_err());
    }
}
