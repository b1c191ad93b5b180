//! Metric winner resolution
//!
//! Given two funds' values for one metric, decide which fund "wins". There
//! is no single generic comparator: fees and minimum investments are
//! lower-is-better, target returns are higher-is-better, and each metric has
//! its own rule for missing data so that an undisclosed value never
//! masquerades as a winning (or losing) zero.
//!
//! Every resolver is a pure function of the two records. Swapping the
//! arguments mirrors the outcome exactly: if A wins, B loses, and ties stay
//! ties.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{format_currency_value, NOT_DISCLOSED};
use domain_fund::Fund;

use crate::fees::{
    format_fund_size, format_management_fee, format_performance_fee, format_redemption_fee,
    format_subscription_fee,
};
use crate::return_target::return_target_display;

/// The metrics a comparison table displays
///
/// The first four carry winner determinations; the rest are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MinimumInvestment,
    TargetReturn,
    ManagementFee,
    RedemptionAvailability,
    PerformanceFee,
    SubscriptionFee,
    RedemptionFee,
    FundSize,
    Established,
    Term,
    Category,
}

impl Metric {
    /// Human-readable row label
    pub fn label(&self) -> &'static str {
        match self {
            Metric::MinimumInvestment => "Minimum investment",
            Metric::TargetReturn => "Target return",
            Metric::ManagementFee => "Management fee",
            Metric::RedemptionAvailability => "Redemption availability",
            Metric::PerformanceFee => "Performance fee",
            Metric::SubscriptionFee => "Subscription fee",
            Metric::RedemptionFee => "Redemption fee",
            Metric::FundSize => "Fund size",
            Metric::Established => "Established",
            Metric::Term => "Term",
            Metric::Category => "Category",
        }
    }
}

/// Which side of a comparison wins a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "none")]
    Neither,
}

impl Winner {
    /// The same outcome seen from the other fund's side
    pub fn mirrored(self) -> Winner {
        match self {
            Winner::A => Winner::B,
            Winner::B => Winner::A,
            Winner::Neither => Winner::Neither,
        }
    }
}

/// One row of a comparison table, computed per render and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricComparison {
    pub metric: Metric,
    pub value_a: String,
    pub value_b: String,
    pub winner: Winner,
}

/// Minimum investment: lower wins
///
/// Absent and zero both mean "not disclosed" here, treated as infinitely
/// high so they can never win. Equal values, including both missing, produce
/// no winner.
pub fn compare_minimum_investment(a: &Fund, b: &Fund) -> MetricComparison {
    let disclosed = |fund: &Fund| fund.minimum_investment.filter(|v| !v.is_zero());
    MetricComparison {
        metric: Metric::MinimumInvestment,
        value_a: format_currency_value(a.minimum_investment),
        value_b: format_currency_value(b.minimum_investment),
        winner: lower_wins(disclosed(a), disclosed(b)),
    }
}

/// Target return: higher stated upper bound wins
///
/// Missing values count as `0` for this comparison only — a fund with no
/// stated return cannot win, but it is not excluded from the comparison.
pub fn compare_target_return(a: &Fund, b: &Fund) -> MetricComparison {
    let upper = |fund: &Fund| fund.expected_return_max.unwrap_or(Decimal::ZERO);
    let winner = match upper(a).cmp(&upper(b)) {
        std::cmp::Ordering::Greater => Winner::A,
        std::cmp::Ordering::Less => Winner::B,
        std::cmp::Ordering::Equal => Winner::Neither,
    };
    MetricComparison {
        metric: Metric::TargetReturn,
        value_a: display_return(a),
        value_b: display_return(b),
        winner,
    }
}

/// Management fee: lower wins
///
/// A disclosed 0% fee is the strongest possible value; an undisclosed fee is
/// treated as infinitely high and never wins.
pub fn compare_management_fee(a: &Fund, b: &Fund) -> MetricComparison {
    MetricComparison {
        metric: Metric::ManagementFee,
        value_a: format_management_fee(a.management_fee),
        value_b: format_management_fee(b.management_fee),
        winner: lower_wins(a.management_fee, b.management_fee),
    }
}

/// Redemption availability: disclosed, non-empty terms beat none
pub fn compare_redemption_availability(a: &Fund, b: &Fund) -> MetricComparison {
    let winner = match (a.has_redemption_terms(), b.has_redemption_terms()) {
        (true, false) => Winner::A,
        (false, true) => Winner::B,
        _ => Winner::Neither,
    };
    MetricComparison {
        metric: Metric::RedemptionAvailability,
        value_a: display_redemption(a),
        value_b: display_redemption(b),
        winner,
    }
}

/// Assembles the full comparison table for a fund pair
///
/// Winner-bearing rows come first, informational rows after. Row text is
/// produced by the shared formatters, so the table shows exactly what detail
/// pages show.
pub fn compare_funds(a: &Fund, b: &Fund) -> Vec<MetricComparison> {
    vec![
        compare_minimum_investment(a, b),
        compare_target_return(a, b),
        compare_management_fee(a, b),
        compare_redemption_availability(a, b),
        informational(
            Metric::PerformanceFee,
            format_performance_fee(a.performance_fee),
            format_performance_fee(b.performance_fee),
        ),
        informational(
            Metric::SubscriptionFee,
            format_subscription_fee(a.subscription_fee),
            format_subscription_fee(b.subscription_fee),
        ),
        informational(
            Metric::RedemptionFee,
            format_redemption_fee(a.redemption_fee),
            format_redemption_fee(b.redemption_fee),
        ),
        informational(
            Metric::FundSize,
            format_fund_size(a.fund_size),
            format_fund_size(b.fund_size),
        ),
        informational(Metric::Established, display_year(a), display_year(b)),
        informational(Metric::Term, display_term(a), display_term(b)),
        informational(Metric::Category, a.category.clone(), b.category.clone()),
    ]
}

fn informational(metric: Metric, value_a: String, value_b: String) -> MetricComparison {
    MetricComparison {
        metric,
        value_a,
        value_b,
        winner: Winner::Neither,
    }
}

/// Lower-is-better comparison where `None` can never win
fn lower_wins(a: Option<Decimal>, b: Option<Decimal>) -> Winner {
    match (a, b) {
        (Some(x), Some(y)) if x < y => Winner::A,
        (Some(x), Some(y)) if y < x => Winner::B,
        (Some(_), None) => Winner::A,
        (None, Some(_)) => Winner::B,
        _ => Winner::Neither,
    }
}

fn display_return(fund: &Fund) -> String {
    return_target_display(fund).unwrap_or_else(|| NOT_DISCLOSED.to_string())
}

fn display_redemption(fund: &Fund) -> String {
    if !fund.has_redemption_terms() {
        return "Not available".to_string();
    }
    fund.redemption_terms
        .as_ref()
        .and_then(|t| t.frequency.clone())
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| "Available".to_string())
}

fn display_year(fund: &Fund) -> String {
    fund.established
        .map(|year| year.to_string())
        .unwrap_or_else(|| NOT_DISCLOSED.to_string())
}

fn display_term(fund: &Fund) -> String {
    match fund.term {
        None | Some(0) => "Open-ended".to_string(),
        Some(1) => "1 year".to_string(),
        Some(years) => format!("{years} years"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::FundId;
    use domain_fund::RedemptionTerms;
    use rust_decimal_macros::dec;

    fn fund(id: &str) -> Fund {
        Fund::new(FundId::new(id), id.to_uppercase(), "Manager", "Private Equity")
    }

    #[test]
    fn test_minimum_investment_lower_wins() {
        let a = fund("a").with_minimum_investment(dec!(300_000));
        let b = fund("b").with_minimum_investment(dec!(500_000));

        assert_eq!(compare_minimum_investment(&a, &b).winner, Winner::A);
        assert_eq!(compare_minimum_investment(&b, &a).winner, Winner::B);
    }

    #[test]
    fn test_minimum_investment_missing_never_wins() {
        let disclosed = fund("a").with_minimum_investment(dec!(500_000));
        let missing = fund("b");

        assert_eq!(compare_minimum_investment(&disclosed, &missing).winner, Winner::A);
        assert_eq!(compare_minimum_investment(&missing, &disclosed).winner, Winner::B);
        assert_eq!(compare_minimum_investment(&missing, &missing).winner, Winner::Neither);
    }

    #[test]
    fn test_minimum_investment_zero_reads_as_undisclosed() {
        let zeroed = fund("a").with_minimum_investment(dec!(0));
        let disclosed = fund("b").with_minimum_investment(dec!(500_000));

        assert_eq!(compare_minimum_investment(&zeroed, &disclosed).winner, Winner::B);
    }

    #[test]
    fn test_minimum_investment_tie() {
        let a = fund("a").with_minimum_investment(dec!(500_000));
        let b = fund("b").with_minimum_investment(dec!(500_000));

        assert_eq!(compare_minimum_investment(&a, &b).winner, Winner::Neither);
    }

    #[test]
    fn test_target_return_higher_wins() {
        let a = fund("a").with_expected_returns(dec!(8), dec!(12));
        let b = fund("b").with_expected_returns(dec!(5), dec!(7));

        assert_eq!(compare_target_return(&a, &b).winner, Winner::A);
        assert_eq!(compare_target_return(&b, &a).winner, Winner::B);
    }

    #[test]
    fn test_target_return_missing_counts_as_zero() {
        let stated = fund("a").with_expected_returns(dec!(5), dec!(7));
        let silent = fund("b");

        assert_eq!(compare_target_return(&stated, &silent).winner, Winner::A);
        assert_eq!(compare_target_return(&silent, &silent).winner, Winner::Neither);
    }

    #[test]
    fn test_management_fee_zero_beats_disclosed() {
        let free = fund("a").with_management_fee(dec!(0));
        let charged = fund("b").with_management_fee(dec!(1.5));

        assert_eq!(compare_management_fee(&free, &charged).winner, Winner::A);
    }

    #[test]
    fn test_management_fee_undisclosed_never_wins() {
        let charged = fund("a").with_management_fee(dec!(2.5));
        let silent = fund("b");

        assert_eq!(compare_management_fee(&charged, &silent).winner, Winner::A);
        assert_eq!(compare_management_fee(&silent, &charged).winner, Winner::B);
    }

    #[test]
    fn test_redemption_availability() {
        let open = fund("a").with_redemption_terms(RedemptionTerms {
            frequency: Some("Quarterly".to_string()),
            ..Default::default()
        });
        let locked = fund("b");

        let row = compare_redemption_availability(&open, &locked);
        assert_eq!(row.winner, Winner::A);
        assert_eq!(row.value_a, "Quarterly");
        assert_eq!(row.value_b, "Not available");

        assert_eq!(compare_redemption_availability(&locked, &locked).winner, Winner::Neither);
        assert_eq!(compare_redemption_availability(&open, &open).winner, Winner::Neither);
    }

    #[test]
    fn test_empty_redemption_terms_do_not_win() {
        let blank = fund("a").with_redemption_terms(RedemptionTerms::default());
        let locked = fund("b");

        assert_eq!(compare_redemption_availability(&blank, &locked).winner, Winner::Neither);
    }

    #[test]
    fn test_winner_and_metric_wire_format() {
        let a = fund("a").with_minimum_investment(dec!(300_000));
        let b = fund("b").with_minimum_investment(dec!(500_000));

        let row = compare_minimum_investment(&a, &b);
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["metric"], "minimum_investment");
        assert_eq!(json["winner"], "a");

        let tie = compare_minimum_investment(&a, &a);
        assert_eq!(serde_json::to_value(&tie).unwrap()["winner"], "none");
    }

    #[test]
    fn test_full_table_shape() {
        let a = fund("a")
            .with_minimum_investment(dec!(300_000))
            .with_management_fee(dec!(1.5))
            .with_fund_size(dec!(50_000_000))
            .with_established(2019)
            .with_term(8);
        let b = fund("b").with_minimum_investment(dec!(500_000));

        let table = compare_funds(&a, &b);

        assert_eq!(table.len(), 11);
        assert_eq!(table[0].metric, Metric::MinimumInvestment);
        assert_eq!(table[0].winner, Winner::A);

        // Informational rows never carry a winner
        let informational = &table[4..];
        assert!(informational.iter().all(|row| row.winner == Winner::Neither));

        let term_row = table.iter().find(|r| r.metric == Metric::Term).unwrap();
        assert_eq!(term_row.value_a, "8 years");
        assert_eq!(term_row.value_b, "Open-ended");

        let size_row = table.iter().find(|r| r.metric == Metric::FundSize).unwrap();
        assert_eq!(size_row.value_a, "€50M");
        assert_eq!(size_row.value_b, "Not disclosed");
    }
}
