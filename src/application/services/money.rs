//! Money and quantity formatting.

use crate::domain::entities::AssetSymbol;

/// Formats a dollar amount as `$12,345.67`.
#[must_use]
pub fn format_usd(value: f64) -> String {
    format_dollars(value, 2)
}

/// Formats a unit price; sub-dollar prices keep four decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    let decimals = if price != 0.0 && price.abs() < 1.0 { 4 } else { 2 };
    format_dollars(price, decimals)
}

/// Formats a held quantity with the asset's display precision.
#[must_use]
pub fn format_quantity(symbol: &AssetSymbol, amount: f64) -> String {
    format!("{amount:.prec$}", prec = symbol.display_precision())
}

fn format_dollars(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "$-".to_string();
    }

    let digits = format!("{:.decimals$}", value.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let grouped = group_thousands(integer);
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction}")
    }
}

fn group_thousands(integer: &str) -> String {
    let mut out = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "$0.00" ; "zero")]
    #[test_case(60.0, "$60.00" ; "small")]
    #[test_case(10_000.0, "$10,000.00" ; "starting_balance")]
    #[test_case(1_234_567.891, "$1,234,567.89" ; "millions")]
    #[test_case(-42.5, "-$42.50" ; "negative")]
    #[test_case(-0.001, "$0.00" ; "negative_rounds_to_zero")]
    #[test_case(999.999, "$1,000.00" ; "rounding_carries")]
    fn test_format_usd(value: f64, expected: &str) {
        assert_eq!(format_usd(value), expected);
    }

    #[test_case(45_000.0, "$45,000.00" ; "btc")]
    #[test_case(0.48, "$0.4800" ; "ada")]
    #[test_case(1.0, "$1.00" ; "usdt")]
    fn test_format_price(price: f64, expected: &str) {
        assert_eq!(format_price(price), expected);
    }

    #[test]
    fn test_format_quantity_precision() {
        let btc = AssetSymbol::new("BTC").unwrap();
        let ada = AssetSymbol::new("ADA").unwrap();
        assert_eq!(format_quantity(&btc, 0.5), "0.500000");
        assert_eq!(format_quantity(&ada, 12.346), "12.35");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_usd(f64::NAN), "$-");
    }
}
