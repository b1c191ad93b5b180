//! Fund domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the fund domain
#[derive(Debug, Error)]
pub enum FundError {
    #[error("Fund not found: {0}")]
    FundNotFound(String),

    #[error("Invalid fund record: {0}")]
    InvalidRecord(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] PortError),
}
