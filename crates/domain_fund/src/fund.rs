//! Fund record definition
//!
//! The fund record is external, read-only input: it is produced by the hosted
//! catalog backend and consumed by formatters, comparison resolvers, and the
//! API layer. All financial attributes are optional because managers disclose
//! them unevenly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::FundId;

/// Redemption terms disclosed by a fund
///
/// A fund "offers redemption" for comparison purposes when at least one of
/// these fields carries a non-blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionTerms {
    /// How often redemption windows open (e.g. "Quarterly")
    #[serde(default)]
    pub frequency: Option<String>,
    /// Required notice before redeeming (e.g. "90 days")
    #[serde(default)]
    pub notice_period: Option<String>,
    /// Minimum holding period before redemption is allowed
    #[serde(default)]
    pub minimum_holding_period: Option<String>,
}

impl RedemptionTerms {
    /// Returns true when no field carries a usable value
    pub fn is_empty(&self) -> bool {
        let blank = |field: &Option<String>| {
            field.as_deref().map_or(true, |s| s.trim().is_empty())
        };
        blank(&self.frequency) && blank(&self.notice_period) && blank(&self.minimum_holding_period)
    }
}

/// A listed Golden Visa investment fund
///
/// Fee fields distinguish `Some(0)` ("no fee charged") from `None`
/// ("undisclosed"). `minimum_investment` and `fund_size` treat both `None`
/// and `0` as "not disclosed". `term` of `None` or `0` means open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Unique identifier (URL slug)
    pub id: FundId,
    /// Display name
    pub name: String,
    /// Fund manager name
    pub manager_name: String,
    /// Category label (e.g. "Private Equity")
    pub category: String,
    /// Minimum investment in EUR
    #[serde(default)]
    pub minimum_investment: Option<Decimal>,
    /// Annual management fee in percent
    #[serde(default)]
    pub management_fee: Option<Decimal>,
    /// Performance fee in percent
    #[serde(default)]
    pub performance_fee: Option<Decimal>,
    /// Subscription fee in percent
    #[serde(default)]
    pub subscription_fee: Option<Decimal>,
    /// Redemption fee in percent
    #[serde(default)]
    pub redemption_fee: Option<Decimal>,
    /// Free-text return target (legacy, e.g. "8-10%")
    #[serde(default)]
    pub return_target: Option<String>,
    /// Structured lower return bound in percent; wins over free text
    #[serde(default)]
    pub expected_return_min: Option<Decimal>,
    /// Structured upper return bound in percent; wins over free text
    #[serde(default)]
    pub expected_return_max: Option<Decimal>,
    /// Assets under management in EUR
    #[serde(default)]
    pub fund_size: Option<Decimal>,
    /// Year the fund was established
    #[serde(default)]
    pub established: Option<i32>,
    /// Fund term in years; absent or zero means open-ended
    #[serde(default)]
    pub term: Option<u32>,
    /// Disclosed redemption terms
    #[serde(default)]
    pub redemption_terms: Option<RedemptionTerms>,
    /// Whether the listing has been verified by the directory
    #[serde(default)]
    pub is_verified: bool,
    /// Labels such as "GV-eligible"
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Fund {
    /// Creates a fund record with the required attributes; everything else
    /// starts undisclosed
    pub fn new(
        id: FundId,
        name: impl Into<String>,
        manager_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            manager_name: manager_name.into(),
            category: category.into(),
            minimum_investment: None,
            management_fee: None,
            performance_fee: None,
            subscription_fee: None,
            redemption_fee: None,
            return_target: None,
            expected_return_min: None,
            expected_return_max: None,
            fund_size: None,
            established: None,
            term: None,
            redemption_terms: None,
            is_verified: false,
            tags: Vec::new(),
        }
    }

    /// Sets the minimum investment
    pub fn with_minimum_investment(mut self, amount: Decimal) -> Self {
        self.minimum_investment = Some(amount);
        self
    }

    /// Sets the management fee
    pub fn with_management_fee(mut self, fee: Decimal) -> Self {
        self.management_fee = Some(fee);
        self
    }

    /// Sets the performance fee
    pub fn with_performance_fee(mut self, fee: Decimal) -> Self {
        self.performance_fee = Some(fee);
        self
    }

    /// Sets the subscription fee
    pub fn with_subscription_fee(mut self, fee: Decimal) -> Self {
        self.subscription_fee = Some(fee);
        self
    }

    /// Sets the redemption fee
    pub fn with_redemption_fee(mut self, fee: Decimal) -> Self {
        self.redemption_fee = Some(fee);
        self
    }

    /// Sets the free-text return target
    pub fn with_return_target(mut self, target: impl Into<String>) -> Self {
        self.return_target = Some(target.into());
        self
    }

    /// Sets both structured return bounds
    pub fn with_expected_returns(mut self, min: Decimal, max: Decimal) -> Self {
        self.expected_return_min = Some(min);
        self.expected_return_max = Some(max);
        self
    }

    /// Sets the fund size (AUM)
    pub fn with_fund_size(mut self, size: Decimal) -> Self {
        self.fund_size = Some(size);
        self
    }

    /// Sets the establishment year
    pub fn with_established(mut self, year: i32) -> Self {
        self.established = Some(year);
        self
    }

    /// Sets the fund term in years
    pub fn with_term(mut self, years: u32) -> Self {
        self.term = Some(years);
        self
    }

    /// Sets the redemption terms
    pub fn with_redemption_terms(mut self, terms: RedemptionTerms) -> Self {
        self.redemption_terms = Some(terms);
        self
    }

    /// Marks the listing as verified
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.is_verified = verified;
        self
    }

    /// Adds a tag label
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// True when the fund discloses at least one usable redemption term
    pub fn has_redemption_terms(&self) -> bool {
        self.redemption_terms.as_ref().map_or(false, |t| !t.is_empty())
    }

    /// True when the fund has no fixed term
    pub fn is_open_ended(&self) -> bool {
        matches!(self.term, None | Some(0))
    }

    /// Case-insensitive tag lookup
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
