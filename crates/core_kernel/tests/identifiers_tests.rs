//! Comprehensive unit tests for fund identifiers
//!
//! Tests cover slug parsing, the reserved-separator rule, ordering, and
//! serde behavior.

use std::str::FromStr;

use core_kernel::{FundId, IdError, COMPARISON_SEPARATOR};

mod parsing {
    use super::*;

    #[test]
    fn test_accepts_typical_slugs() {
        for slug in ["golden-horizon", "fund2024", "a", "atlantic-yield-ii"] {
            assert!(FundId::from_str(slug).is_ok(), "{slug} should parse");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(FundId::from_str(""), Err(IdError::Empty));
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            FundId::from_str("Golden Horizon"),
            Err(IdError::InvalidCharacter('G'))
        );
        assert_eq!(
            FundId::from_str("fonds_été"),
            Err(IdError::InvalidCharacter('_'))
        );
    }

    #[test]
    fn test_rejects_embedded_comparison_separator() {
        let ambiguous = format!("alpha{COMPARISON_SEPARATOR}beta");
        assert_eq!(FundId::from_str(&ambiguous), Err(IdError::ReservedSeparator));
    }

    #[test]
    fn test_plain_vs_without_hyphens_is_fine() {
        // Only the full "-vs-" sequence is reserved.
        assert!(FundId::from_str("vs-capital-fund").is_ok());
    }
}

mod representation {
    use super::*;

    #[test]
    fn test_display_is_the_raw_slug() {
        let id = FundId::new("golden-horizon");
        assert_eq!(id.to_string(), "golden-horizon");
        assert_eq!(id.as_str(), "golden-horizon");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut ids = vec![FundId::new("zeta"), FundId::new("alpha"), FundId::new("mid")];
        ids.sort();

        let sorted: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(sorted, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = FundId::new("golden-horizon");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"golden-horizon\"");

        let back: FundId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
