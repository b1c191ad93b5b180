//! Strongly-typed identifiers for domain entities
//!
//! Fund identifiers are human-readable URL slugs rather than opaque UUIDs:
//! they appear verbatim inside comparison URLs (`{a}-vs-{b}`), so the type
//! enforces the slug grammar at the parsing boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator used when two fund ids are joined into a comparison slug.
///
/// Fund ids must never contain this sequence, otherwise the comparison
/// slug grammar becomes ambiguous.
pub const COMPARISON_SEPARATOR: &str = "-vs-";

/// Errors from parsing a fund identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("identifier contains the reserved separator \"{COMPARISON_SEPARATOR}\"")]
    ReservedSeparator,
}

/// A stable, unique fund identifier in URL-slug form
///
/// Lowercase letters, digits, and hyphens only. Ids are compared and sorted
/// lexicographically, which is the ordering the comparison slug codec relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundId(String);

impl FundId {
    /// Creates an identifier from trusted catalog data without validation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FundId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FundId> for String {
    fn from(id: FundId) -> String {
        id.0
    }
}

impl FromStr for FundId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(IdError::InvalidCharacter(c));
        }
        if s.contains(COMPARISON_SEPARATOR) {
            return Err(IdError::ReservedSeparator);
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slug() {
        let id: FundId = "golden-horizon-fund".parse().unwrap();
        assert_eq!(id.as_str(), "golden-horizon-fund");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<FundId>(), Err(IdError::Empty));
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        assert_eq!(
            "Golden".parse::<FundId>(),
            Err(IdError::InvalidCharacter('G'))
        );
    }

    #[test]
    fn test_parse_rejects_reserved_separator() {
        assert_eq!(
            "alpha-vs-beta".parse::<FundId>(),
            Err(IdError::ReservedSeparator)
        );
    }

    #[test]
    fn test_ids_sort_lexicographically() {
        let a = FundId::new("alpha");
        let b = FundId::new("beta");
        assert!(a < b);
    }
}
