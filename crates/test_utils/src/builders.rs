//! Test Data Builders
//!
//! Builder for constructing fund records with sensible defaults, so tests
//! specify only the fields they care about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::FundId;
use domain_fund::{Fund, RedemptionTerms};

/// Builder for test fund records
///
/// Defaults to a verified private-equity fund with typical Golden Visa
/// attributes; every field can be overridden or cleared.
pub struct TestFundBuilder {
    fund: Fund,
}

impl Default for TestFundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFundBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        let fund = Fund::new(
            FundId::new("test-fund"),
            "Test Fund",
            "Test Capital",
            "Private Equity",
        )
        .with_minimum_investment(dec!(500_000))
        .with_management_fee(dec!(1.5))
        .with_expected_returns(dec!(6), dec!(8))
        .with_term(6)
        .with_verified(true);
        Self { fund }
    }

    /// Sets the fund id
    pub fn with_id(mut self, id: &str) -> Self {
        self.fund.id = FundId::new(id);
        self
    }

    /// Sets the fund name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.fund.name = name.into();
        self
    }

    /// Sets the manager name
    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.fund.manager_name = manager.into();
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.fund.category = category.into();
        self
    }

    /// Sets the minimum investment; `None` clears it
    pub fn with_minimum_investment(mut self, amount: Option<Decimal>) -> Self {
        self.fund.minimum_investment = amount;
        self
    }

    /// Sets the management fee; `None` clears it
    pub fn with_management_fee(mut self, fee: Option<Decimal>) -> Self {
        self.fund.management_fee = fee;
        self
    }

    /// Sets the structured return bounds; `None` clears them
    pub fn with_expected_returns(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.fund.expected_return_min = min;
        self.fund.expected_return_max = max;
        self
    }

    /// Sets the free-text return target
    pub fn with_return_target(mut self, target: impl Into<String>) -> Self {
        self.fund.return_target = Some(target.into());
        self
    }

    /// Sets the term in years; `None` clears it
    pub fn with_term(mut self, years: Option<u32>) -> Self {
        self.fund.term = years;
        self
    }

    /// Sets the redemption terms
    pub fn with_redemption_terms(mut self, terms: RedemptionTerms) -> Self {
        self.fund.redemption_terms = Some(terms);
        self
    }

    /// Sets the verification flag
    pub fn verified(mut self, verified: bool) -> Self {
        self.fund.is_verified = verified;
        self
    }

    /// Builds the fund record
    pub fn build(self) -> Fund {
        self.fund
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let fund = TestFundBuilder::new().build();

        assert_eq!(fund.id.as_str(), "test-fund");
        assert!(fund.is_verified);
        assert_eq!(fund.management_fee, Some(dec!(1.5)));
    }

    #[test]
    fn test_builder_overrides_and_clears() {
        let fund = TestFundBuilder::new()
            .with_id("custom")
            .with_management_fee(None)
            .with_term(None)
            .build();

        assert_eq!(fund.id.as_str(), "custom");
        assert_eq!(fund.management_fee, None);
        assert!(fund.is_open_ended());
    }
}
