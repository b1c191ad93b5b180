//! Fund Comparison Derivation
//!
//! This crate implements the pure derivation layer behind fund-vs-fund
//! comparison pages: given two fund records it produces a canonical
//! comparison identity, normalized display values, per-metric winner
//! determinations, and a low-value signal for search-indexing suppression.
//!
//! # Key Concepts
//!
//! - **Comparison slug**: the single canonical `{a}-vs-{b}` identity of an
//!   unordered fund pair, derived at link time and parsed back at page load
//! - **Normalizers**: convert heterogeneous return/fee representations into
//!   one display form, defined once so every view agrees
//! - **Winner resolution**: per-metric rules — "lower is better" for fees
//!   and minimums, "higher is better" for target returns, and missing data
//!   never masquerades as a winning zero
//! - **Low-value classification**: advisory noindex signal for pairs that
//!   offer negligible differentiation
//!
//! # Error Posture
//!
//! Nothing here returns `Result` or panics. Malformed slugs pass through or
//! parse to `None`, unparseable text yields empty bounds, and missing
//! numerics follow per-field sentinel rules. A bad data field must never
//! take down a comparison page.

pub mod classifier;
pub mod fees;
pub mod metrics;
pub mod return_target;
pub mod slug;

pub use classifier::{
    comparison_signals, is_low_value_comparison, is_low_value_comparison_with,
    ClassifierThresholds, ComparisonSignals,
};
pub use fees::{
    format_fund_size, format_management_fee, format_performance_fee, format_redemption_fee,
    format_subscription_fee,
};
pub use metrics::{
    compare_funds, compare_management_fee, compare_minimum_investment,
    compare_redemption_availability, compare_target_return, Metric, MetricComparison, Winner,
};
pub use return_target::{return_target_display, return_target_numbers, ReturnBounds};
pub use slug::{
    create_comparison_slug, is_canonical_comparison_slug, normalize_comparison_slug,
    parse_comparison_slug, SlugParts,
};
