//! Fee and fund-size display formatting
//!
//! `None` is "Not disclosed" and `Some(0)` is "None" (no fee charged) —
//! the two must never collapse into each other. The four fee formatters are
//! intentionally separate entry points even though they currently share
//! logic: each fee type's display text can diverge without cross-impact.

use rust_decimal::Decimal;

use core_kernel::{format_currency_value, NOT_DISCLOSED};

/// Formats an annual management fee
pub fn format_management_fee(fee: Option<Decimal>) -> String {
    format_percent_fee(fee)
}

/// Formats a performance fee
pub fn format_performance_fee(fee: Option<Decimal>) -> String {
    format_percent_fee(fee)
}

/// Formats a subscription fee
pub fn format_subscription_fee(fee: Option<Decimal>) -> String {
    format_percent_fee(fee)
}

/// Formats a redemption fee
pub fn format_redemption_fee(fee: Option<Decimal>) -> String {
    format_percent_fee(fee)
}

/// Formats a fund size (AUM) in compact EUR form
pub fn format_fund_size(size: Option<Decimal>) -> String {
    format_currency_value(size)
}

fn format_percent_fee(fee: Option<Decimal>) -> String {
    match fee {
        None => NOT_DISCLOSED.to_string(),
        Some(value) if value.is_zero() => "None".to_string(),
        Some(value) => format!("{}%", value.normalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_undisclosed_fee() {
        assert_eq!(format_management_fee(None), "Not disclosed");
        assert_eq!(format_performance_fee(None), "Not disclosed");
    }

    #[test]
    fn test_zero_fee_is_none_not_undisclosed() {
        assert_eq!(format_management_fee(Some(dec!(0))), "None");
        assert_eq!(format_subscription_fee(Some(dec!(0))), "None");
        assert_ne!(format_subscription_fee(Some(dec!(0))), format_subscription_fee(None));
    }

    #[test]
    fn test_disclosed_fee() {
        assert_eq!(format_management_fee(Some(dec!(2.5))), "2.5%");
        assert_eq!(format_redemption_fee(Some(dec!(1.00))), "1%");
        assert_eq!(format_performance_fee(Some(dec!(20))), "20%");
    }

    #[test]
    fn test_fund_size() {
        assert_eq!(format_fund_size(Some(dec!(50_000_000))), "€50M");
        assert_eq!(format_fund_size(None), "Not disclosed");
        assert_eq!(format_fund_size(Some(dec!(0))), "Not disclosed");
    }
}
