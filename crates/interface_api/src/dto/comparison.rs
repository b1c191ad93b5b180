//! Comparison DTOs

use serde::Serialize;

use domain_comparison::{Metric, MetricComparison, Winner};

use super::fund::FundResponse;

/// One row of the comparison table
#[derive(Debug, Serialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: String,
    pub value_a: String,
    pub value_b: String,
    pub winner: Winner,
}

impl From<MetricComparison> for MetricRow {
    fn from(row: MetricComparison) -> Self {
        Self {
            label: row.metric.label().to_string(),
            metric: row.metric,
            value_a: row.value_a,
            value_b: row.value_b,
            winner: row.winner,
        }
    }
}

/// A rendered fund-vs-fund comparison
///
/// `noindex` is advisory metadata for the SEO layer; the payload is complete
/// either way.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub slug: String,
    pub fund_a: FundResponse,
    pub fund_b: FundResponse,
    pub metrics: Vec<MetricRow>,
    pub noindex: bool,
}
