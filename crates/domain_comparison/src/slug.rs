//! Comparison slug codec
//!
//! Every unordered pair of fund ids has exactly one canonical URL
//! representation: the two ids sorted lexicographically and joined with
//! `-vs-`. Links are generated canonical; anything arriving non-canonical
//! (old links, hand-edited URLs) is detected here so the routing layer can
//! redirect instead of serving duplicate pages.
//!
//! Malformed input never errors: normalization passes it through unchanged
//! and parsing returns `None`.

use serde::Serialize;

use core_kernel::COMPARISON_SEPARATOR;

/// The two fund ids of a parsed comparison slug, in sorted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugParts {
    pub fund1_id: String,
    pub fund2_id: String,
}

/// Builds the canonical comparison slug for two fund ids
///
/// Order-independent: the ids are sorted before joining, so
/// `create_comparison_slug(a, b) == create_comparison_slug(b, a)`.
pub fn create_comparison_slug(id_a: &str, id_b: &str) -> String {
    let (first, second) = if id_a <= id_b { (id_a, id_b) } else { (id_b, id_a) };
    format!("{first}{COMPARISON_SEPARATOR}{second}")
}

/// Rewrites a slug into canonical (sorted) form
///
/// Input that does not split into exactly two parts is returned unchanged —
/// bad URLs are the router's problem, not a panic.
pub fn normalize_comparison_slug(slug: &str) -> String {
    match split_pair(slug) {
        Some((a, b)) => create_comparison_slug(a, b),
        None => slug.to_string(),
    }
}

/// True when the slug is already in canonical form
pub fn is_canonical_comparison_slug(slug: &str) -> bool {
    slug == normalize_comparison_slug(slug)
}

/// Parses a slug into its two fund ids, sorted
///
/// Round-trips with [`create_comparison_slug`] regardless of the order the
/// ids were originally supplied in. Malformed input yields `None`.
pub fn parse_comparison_slug(slug: &str) -> Option<SlugParts> {
    let (a, b) = split_pair(slug)?;
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    Some(SlugParts {
        fund1_id: first.to_string(),
        fund2_id: second.to_string(),
    })
}

fn split_pair(slug: &str) -> Option<(&str, &str)> {
    let mut parts = slug.split(COMPARISON_SEPARATOR);
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent(slug in "\\PC*") {
            let once = normalize_comparison_slug(&slug);
            let twice = normalize_comparison_slug(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn creation_is_order_independent(a in "[a-z0-9-]{1,24}", b in "[a-z0-9-]{1,24}") {
            prop_assert_eq!(create_comparison_slug(&a, &b), create_comparison_slug(&b, &a));
        }

        #[test]
        fn created_slugs_are_canonical(a in "[a-z0-9]{1,16}", b in "[a-z0-9]{1,16}") {
            prop_assert!(is_canonical_comparison_slug(&create_comparison_slug(&a, &b)));
        }

        #[test]
        fn parse_round_trips_sorted(a in "[a-z0-9]{1,16}", b in "[a-z0-9]{1,16}") {
            let parts = parse_comparison_slug(&create_comparison_slug(&a, &b)).unwrap();
            let (lo, hi) = if a <= b { (&a, &b) } else { (&b, &a) };
            prop_assert_eq!(&parts.fund1_id, lo);
            prop_assert_eq!(&parts.fund2_id, hi);
        }
    }
}
