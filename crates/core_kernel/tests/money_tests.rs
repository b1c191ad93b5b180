//! Comprehensive unit tests for compact EUR formatting
//!
//! Tests cover the scaling thresholds, trailing-zero trimming, and the
//! absent-vs-zero fallback rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{format_currency_value, format_currency_value_or, NOT_DISCLOSED};

mod scaling {
    use super::*;

    #[test]
    fn test_billions_threshold() {
        assert_eq!(format_currency_value(Some(dec!(1_000_000_000))), "€1B");
        assert_eq!(format_currency_value(Some(dec!(2_400_000_000))), "€2.4B");
    }

    #[test]
    fn test_millions_threshold() {
        assert_eq!(format_currency_value(Some(dec!(1_000_000))), "€1M");
        assert_eq!(format_currency_value(Some(dec!(120_000_000))), "€120M");
        assert_eq!(format_currency_value(Some(dec!(999_999_999))), "€1000M");
    }

    #[test]
    fn test_thousands_threshold() {
        assert_eq!(format_currency_value(Some(dec!(500_000))), "€500,000");
        assert_eq!(format_currency_value(Some(dec!(350_000))), "€350,000");
    }

    #[test]
    fn test_below_one_thousand() {
        assert_eq!(format_currency_value(Some(dec!(999))), "€999");
        assert_eq!(format_currency_value(Some(dec!(1))), "€1");
    }

    #[test]
    fn test_whole_scaled_values_drop_the_decimal() {
        // 2_000_000_000 / 1e9 is exactly 2; no "2.0B"
        let formatted = format_currency_value(Some(dec!(2_000_000_000)));
        assert!(!formatted.contains(".0"), "got {formatted}");
    }
}

mod fallback {
    use super::*;

    #[test]
    fn test_none_and_zero_read_as_not_disclosed() {
        assert_eq!(format_currency_value(None), NOT_DISCLOSED);
        assert_eq!(format_currency_value(Some(Decimal::ZERO)), NOT_DISCLOSED);
    }

    #[test]
    fn test_custom_fallback_text() {
        assert_eq!(format_currency_value_or(None, "TBD"), "TBD");
        assert_eq!(format_currency_value_or(Some(Decimal::ZERO), "TBD"), "TBD");
        assert_eq!(format_currency_value_or(Some(dec!(5_000)), "TBD"), "€5,000");
    }
}
