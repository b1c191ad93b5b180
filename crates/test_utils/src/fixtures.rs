//! Pre-built Test Fixtures
//!
//! Ready-to-use fund records for common test scenarios. These are designed
//! to be consistent and predictable: the same ids, managers, and financial
//! attributes appear across the whole test suite, so assertions can name
//! them directly.

use rust_decimal_macros::dec;

use core_kernel::FundId;
use domain_fund::{Fund, RedemptionTerms};

/// Fixture for fund test data
pub struct FundFixtures;

impl FundFixtures {
    /// A verified private-equity fund with structured return bounds and a
    /// waived subscription fee
    pub fn golden_horizon() -> Fund {
        Fund::new(
            FundId::new("golden-horizon"),
            "Golden Horizon Fund",
            "Horizon Capital",
            "Private Equity",
        )
        .with_minimum_investment(dec!(500_000))
        .with_management_fee(dec!(1.5))
        .with_performance_fee(dec!(20))
        .with_subscription_fee(dec!(0))
        .with_expected_returns(dec!(8), dec!(10))
        .with_fund_size(dec!(120_000_000))
        .with_established(2019)
        .with_term(8)
        .with_verified(true)
        .with_tag("GV-eligible")
    }

    /// A verified fixed-income fund with a legacy free-text return target
    /// and quarterly redemption
    pub fn atlantic_yield() -> Fund {
        Fund::new(
            FundId::new("atlantic-yield"),
            "Atlantic Yield Fund",
            "Atlantic Partners",
            "Fixed Income",
        )
        .with_minimum_investment(dec!(350_000))
        .with_management_fee(dec!(1.0))
        .with_return_target("5-7%")
        .with_fund_size(dec!(80_000_000))
        .with_established(2017)
        .with_redemption_terms(RedemptionTerms {
            frequency: Some("Quarterly".to_string()),
            notice_period: Some("90 days".to_string()),
            minimum_holding_period: Some("1 year".to_string()),
        })
        .with_verified(true)
        .with_tag("GV-eligible")
    }

    /// An unverified listing that discloses almost nothing
    pub fn undisclosed_fund() -> Fund {
        Fund::new(
            FundId::new("iberian-opportunity"),
            "Iberian Opportunity Fund",
            "Iberian Ventures",
            "Venture Capital",
        )
    }

    /// First half of a near-identical sibling pair from one manager
    pub fn acme_growth() -> Fund {
        Fund::new(
            FundId::new("acme-growth"),
            "Acme Growth Fund",
            "Acme Capital",
            "Private Equity",
        )
        .with_minimum_investment(dec!(300_000))
        .with_management_fee(dec!(1.0))
        .with_term(6)
        .with_verified(true)
    }

    /// Second half of the sibling pair; differs from [`Self::acme_growth`]
    /// by less than every classifier threshold
    pub fn acme_income() -> Fund {
        Fund::new(
            FundId::new("acme-income"),
            "Acme Income Fund",
            "Acme Capital",
            "Private Equity",
        )
        .with_minimum_investment(dec!(320_000))
        .with_management_fee(dec!(1.2))
        .with_term(6)
        .with_verified(true)
    }

    /// The full fixture directory, as a catalog snapshot would deliver it
    pub fn directory() -> Vec<Fund> {
        vec![
            Self::golden_horizon(),
            Self::atlantic_yield(),
            Self::undisclosed_fund(),
            Self::acme_growth(),
            Self::acme_income(),
        ]
    }
}
