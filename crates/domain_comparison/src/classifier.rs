//! Low-value comparison classification
//!
//! Some fund pairs offer the reader nothing to choose between — two vehicles
//! from the same manager in the same category with near-identical terms.
//! Those comparison pages stay up and fully functional, but they get flagged
//! so the SEO layer can mark them noindex instead of flooding search results
//! with near-duplicates. A soft suppress, never an access decision.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_fund::Fund;

/// Difference thresholds below which two funds read as interchangeable
///
/// The defaults reproduce observed product behavior; they are heuristics,
/// not business rules, so the SEO layer may tune them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierThresholds {
    /// Management fee difference in percentage points (exclusive)
    pub fee_delta: Decimal,
    /// Minimum investment difference in EUR (exclusive)
    pub minimum_investment_delta: Decimal,
    /// Term difference in years (inclusive)
    pub term_delta: u32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            fee_delta: dec!(0.3),
            minimum_investment_delta: dec!(50_000),
            term_delta: 1,
        }
    }
}

/// The raw signals the classifier combines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonSignals {
    pub same_manager: bool,
    pub same_category: bool,
    pub minimal_difference: bool,
}

/// Computes the classification signals for a fund pair
///
/// Manager names match case-insensitively; categories match exactly. For the
/// difference computation only, missing numeric fields count as `0` — this
/// deliberately differs from the winner resolvers' sentinel rules, because
/// here we measure similarity, not merit.
pub fn comparison_signals(a: &Fund, b: &Fund, thresholds: &ClassifierThresholds) -> ComparisonSignals {
    let fee = |fund: &Fund| fund.management_fee.unwrap_or(Decimal::ZERO);
    let minimum = |fund: &Fund| fund.minimum_investment.unwrap_or(Decimal::ZERO);
    let term = |fund: &Fund| i64::from(fund.term.unwrap_or(0));

    let minimal_difference = (fee(a) - fee(b)).abs() < thresholds.fee_delta
        && (minimum(a) - minimum(b)).abs() < thresholds.minimum_investment_delta
        && (term(a) - term(b)).abs() <= i64::from(thresholds.term_delta);

    ComparisonSignals {
        same_manager: a.manager_name.to_lowercase() == b.manager_name.to_lowercase(),
        same_category: a.category == b.category,
        minimal_difference,
    }
}

/// Classifies a fund pair with the default thresholds
pub fn is_low_value_comparison(a: &Fund, b: &Fund) -> bool {
    is_low_value_comparison_with(a, b, &ClassifierThresholds::default())
}

/// Classifies a fund pair as low-value (noindex-worthy)
///
/// True when the funds are minimally different within the same category and
/// either share a manager or are both unverified listings.
pub fn is_low_value_comparison_with(a: &Fund, b: &Fund, thresholds: &ClassifierThresholds) -> bool {
    let signals = comparison_signals(a, b, thresholds);
    let undifferentiated = signals.same_category && signals.minimal_difference;

    (signals.same_manager && undifferentiated)
        || (!a.is_verified && !b.is_verified && undifferentiated)
}
