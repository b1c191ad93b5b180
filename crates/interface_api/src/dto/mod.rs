//! Request/Response data transfer objects

pub mod comparison;
pub mod fund;

pub use comparison::{ComparisonResponse, MetricRow};
pub use fund::FundResponse;
