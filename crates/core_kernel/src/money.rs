//! Compact EUR display with precise decimal arithmetic
//!
//! Fund sizes and investment amounts are stored as base-EUR amounts and
//! rendered in compact form (`€1.5B`, `€20M`, `€500,000`). The scaling is
//! defined once here so every view of an amount agrees.
//!
//! Amounts use rust_decimal throughout; no floating point is involved in
//! either the arithmetic or the formatting.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Display text for an absent or zero amount
pub const NOT_DISCLOSED: &str = "Not disclosed";

/// Formats a base-EUR amount in compact form
///
/// Scaling thresholds sit at 1e9, 1e6 and 1e3:
///
/// - `1_500_000_000` → `"€1.5B"`
/// - `20_000_000` → `"€20M"`
/// - `500_000` → `"€500,000"`
/// - `250` → `"€250"`
///
/// `None` and exactly `0` both render as `"Not disclosed"` — an amount of
/// zero is not meaningful for fund sizes or minimum investments.
pub fn format_currency_value(amount: Option<Decimal>) -> String {
    format_currency_value_or(amount, NOT_DISCLOSED)
}

/// Same as [`format_currency_value`] with a caller-chosen fallback text
pub fn format_currency_value_or(amount: Option<Decimal>, fallback: &str) -> String {
    let amount = match amount {
        Some(a) if !a.is_zero() => a,
        _ => return fallback.to_string(),
    };

    if amount >= dec!(1_000_000_000) {
        format!("€{}B", scale(amount, dec!(1_000_000_000)))
    } else if amount >= dec!(1_000_000) {
        format!("€{}M", scale(amount, dec!(1_000_000)))
    } else if amount >= dec!(1_000) {
        format!("€{},000", scale(amount, dec!(1_000)))
    } else {
        format!("€{}", amount.normalize())
    }
}

/// Scales an amount by a divisor, keeping one decimal place and stripping a
/// trailing `.0` so whole scaled values render bare (`2` rather than `2.0`).
fn scale(amount: Decimal, divisor: Decimal) -> Decimal {
    (amount / divisor).round_dp(1).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billions() {
        assert_eq!(format_currency_value(Some(dec!(1_500_000_000))), "€1.5B");
        assert_eq!(format_currency_value(Some(dec!(2_000_000_000))), "€2B");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_currency_value(Some(dec!(20_000_000))), "€20M");
        assert_eq!(format_currency_value(Some(dec!(1_260_000))), "€1.3M");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_currency_value(Some(dec!(500_000))), "€500,000");
        assert_eq!(format_currency_value(Some(dec!(1_000))), "€1,000");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency_value(Some(dec!(250))), "€250");
    }

    #[test]
    fn test_absent_and_zero_fall_back() {
        assert_eq!(format_currency_value(None), NOT_DISCLOSED);
        assert_eq!(format_currency_value(Some(Decimal::ZERO)), NOT_DISCLOSED);
        assert_eq!(format_currency_value_or(None, "—"), "—");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn formatting_never_panics(amount in proptest::option::of(-1_000_000_000_000i64..1_000_000_000_000i64)) {
            let formatted = format_currency_value(amount.map(Decimal::from));
            prop_assert!(!formatted.is_empty());
        }

        #[test]
        fn positive_amounts_render_as_euros(amount in 1i64..1_000_000_000_000i64) {
            let formatted = format_currency_value(Some(Decimal::from(amount)));
            prop_assert!(formatted.starts_with('€'));
        }
    }
}
