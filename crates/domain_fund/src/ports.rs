//! Fund Catalog Port
//!
//! The directory reads fund records from a hosted backend. This trait is the
//! seam: the production adapter talks to that backend, while tests and local
//! tooling use [`crate::adapters::InMemoryFundCatalog`].
//!
//! Reads are the only operations — the comparison subsystem never writes.

use async_trait::async_trait;

use core_kernel::{FundId, PortError};

use crate::fund::Fund;

/// Read-only access to the fund catalog
///
/// An unknown id is `Ok(None)`, not an error: callers routinely probe ids
/// that arrive from URLs.
#[async_trait]
pub trait FundCatalog: Send + Sync {
    /// Fetches a single fund by id
    async fn fund(&self, id: &FundId) -> Result<Option<Fund>, PortError>;

    /// Lists all funds in the catalog
    async fn list_funds(&self) -> Result<Vec<Fund>, PortError>;
}
