//! In-memory fund catalog
//!
//! Holds the full fund set in a map, typically seeded from a JSON snapshot of
//! the hosted backend. Records are cloned out on read; the catalog itself is
//! immutable after construction, so it is freely shareable across tasks.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use core_kernel::{FundId, PortError};

use crate::error::FundError;
use crate::fund::Fund;
use crate::ports::FundCatalog;

/// A catalog adapter serving funds from memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryFundCatalog {
    funds: HashMap<FundId, Fund>,
}

impl InMemoryFundCatalog {
    /// Builds a catalog from fund records
    ///
    /// Later records win on duplicate ids; duplicates are logged since they
    /// indicate a bad snapshot.
    pub fn new(funds: impl IntoIterator<Item = Fund>) -> Self {
        let mut map = HashMap::new();
        for fund in funds {
            if map.insert(fund.id.clone(), fund.clone()).is_some() {
                warn!(fund_id = %fund.id, "duplicate fund id in catalog snapshot");
            }
        }
        Self { funds: map }
    }

    /// Builds a catalog from a JSON array of fund records
    pub fn from_json(json: &str) -> Result<Self, FundError> {
        let funds: Vec<Fund> =
            serde_json::from_str(json).map_err(|e| FundError::InvalidRecord(e.to_string()))?;
        let catalog = Self::new(funds);
        info!(fund_count = catalog.len(), "loaded fund catalog snapshot");
        Ok(catalog)
    }

    /// Number of funds in the catalog
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    /// True when the catalog holds no funds
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

#[async_trait]
impl FundCatalog for InMemoryFundCatalog {
    async fn fund(&self, id: &FundId) -> Result<Option<Fund>, PortError> {
        let found = self.funds.get(id).cloned();
        if found.is_none() {
            debug!(fund_id = %id, "fund not in catalog");
        }
        Ok(found)
    }

    async fn list_funds(&self) -> Result<Vec<Fund>, PortError> {
        let mut funds: Vec<Fund> = self.funds.values().cloned().collect();
        funds.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(funds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund(id: &str) -> Fund {
        Fund::new(FundId::new(id), id.to_uppercase(), "Manager", "Private Equity")
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let catalog = InMemoryFundCatalog::new([fund("alpha"), fund("beta")]);

        let found = catalog.fund(&FundId::new("alpha")).await.unwrap();
        assert_eq!(found.unwrap().id.as_str(), "alpha");
    }

    #[tokio::test]
    async fn test_unknown_id_is_none_not_error() {
        let catalog = InMemoryFundCatalog::new([fund("alpha")]);

        let found = catalog.fund(&FundId::new("missing")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_id() {
        let catalog = InMemoryFundCatalog::new([fund("zeta"), fund("alpha"), fund("mid")]);

        let funds = catalog.list_funds().await.unwrap();
        let ids: Vec<&str> = funds.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_from_json() {
        let catalog = InMemoryFundCatalog::from_json(
            r#"[
                {"id": "alpha", "name": "Alpha", "managerName": "M", "category": "Private Equity"},
                {"id": "beta", "name": "Beta", "managerName": "M", "category": "Venture Capital"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = InMemoryFundCatalog::from_json("not json");
        assert!(matches!(result, Err(FundError::InvalidRecord(_))));
    }
}
