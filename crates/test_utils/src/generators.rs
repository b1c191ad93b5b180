//! Property-Based Test Generators
//!
//! Proptest strategies for generating random fund data that maintains the
//! domain's disclosure rules (optional fields genuinely absent, not zeroed).

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::FundId;
use domain_fund::{Fund, RedemptionTerms};

/// Strategy for valid fund-id slugs
///
/// Slugs never contain the reserved `-vs-` separator, matching what
/// `FundId::from_str` accepts.
pub fn fund_id_strategy() -> impl Strategy<Value = FundId> {
    "[a-z0-9]{1,10}(-[a-rt-z0-9]{1,10}){0,2}".prop_map(|slug| FundId::new(slug))
}

/// Strategy for optional percentage values (fees, return bounds)
pub fn percentage_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0u32..=5000u32).prop_map(|basis_points| {
        Decimal::new(i64::from(basis_points), 2)
    }))
}

/// Strategy for optional EUR amounts
pub fn amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0i64..5_000_000i64).prop_map(Decimal::from))
}

/// Strategy for optional redemption terms, sometimes present but empty
pub fn redemption_terms_strategy() -> impl Strategy<Value = Option<RedemptionTerms>> {
    proptest::option::of(proptest::option::of(Just("Quarterly".to_string())).prop_map(
        |frequency| RedemptionTerms {
            frequency,
            notice_period: None,
            minimum_holding_period: None,
        },
    ))
}

/// Strategy for whole fund records with uneven disclosure
pub fn fund_strategy() -> impl Strategy<Value = Fund> {
    (
        fund_id_strategy(),
        percentage_strategy(),
        percentage_strategy(),
        amount_strategy(),
        proptest::option::of(0u32..15u32),
        redemption_terms_strategy(),
        any::<bool>(),
    )
        .prop_map(|(id, fee, return_max, minimum, term, redemption, verified)| {
            let mut fund = Fund::new(id, "Generated Fund", "Generated Capital", "Private Equity");
            fund.management_fee = fee;
            fund.expected_return_max = return_max;
            fund.minimum_investment = minimum;
            fund.term = term;
            fund.redemption_terms = redemption;
            fund.is_verified = verified;
            fund
        })
}
