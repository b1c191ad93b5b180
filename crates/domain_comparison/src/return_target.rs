//! Return target normalization
//!
//! Managers state target returns two ways: structured numeric bounds
//! (`expected_return_min`/`expected_return_max`) and legacy free text
//! (`"8-10%"`, `"8 to 10 %"`, `"around 7"`). The structured fields are the
//! source of truth whenever either is present; text parsing is a best-effort
//! fallback for records that predate them.
//!
//! For display purposes a bound of exactly `0` counts as absent — a 0%
//! target is not a statement anyone renders. This is deliberately the
//! opposite of the fee rule, where a disclosed 0 is meaningful.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use domain_fund::Fund;

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)").expect("regex: return range"));

static SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("regex: single return"));

static TO_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bto\b").expect("regex: to word"));

/// Normalized return bounds in percent
///
/// A single stated number yields `min == max`; unparseable input yields
/// neither bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReturnBounds {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

/// Resolves a fund's return target into numeric bounds
///
/// Structured fields win whenever at least one is present, even one-sided.
/// Otherwise the free-text `return_target` is parsed: en/em dashes and the
/// word "to" normalize to `-`, then the first `number-number` range or
/// single `number` is taken.
pub fn return_target_numbers(fund: &Fund) -> ReturnBounds {
    if fund.expected_return_min.is_some() || fund.expected_return_max.is_some() {
        return ReturnBounds {
            min: fund.expected_return_min,
            max: fund.expected_return_max,
        };
    }
    match fund.return_target.as_deref() {
        Some(text) => parse_return_text(text),
        None => ReturnBounds::default(),
    }
}

/// Renders a fund's return target for display, or `None` when there is
/// nothing meaningful to show
///
/// - one usable bound, or two equal ones → `"8% p.a."`
/// - two distinct bounds → `"8–10% p.a."`
/// - no usable bound → the raw text, unless it is a no-value sentinel
///
/// Numbers are trimmed of trailing `.00`.
pub fn return_target_display(fund: &Fund) -> Option<String> {
    let bounds = return_target_numbers(fund);
    let usable = |bound: Option<Decimal>| bound.filter(|v| !v.is_zero());

    match (usable(bounds.min), usable(bounds.max)) {
        (None, None) => raw_fallback(fund),
        (Some(v), None) | (None, Some(v)) => Some(format!("{}% p.a.", v.normalize())),
        (Some(min), Some(max)) if min == max => Some(format!("{}% p.a.", min.normalize())),
        (Some(min), Some(max)) => Some(format!("{}–{}% p.a.", min.normalize(), max.normalize())),
    }
}

fn parse_return_text(text: &str) -> ReturnBounds {
    let dashed = text.replace(['–', '—'], "-");
    let normalized = TO_WORD_RE.replace_all(&dashed, "-");

    if let Some(caps) = RANGE_RE.captures(&normalized) {
        return ReturnBounds {
            min: caps[1].parse().ok(),
            max: caps[2].parse().ok(),
        };
    }
    if let Some(caps) = SINGLE_RE.captures(&normalized) {
        let value: Option<Decimal> = caps[1].parse().ok();
        return ReturnBounds {
            min: value,
            max: value,
        };
    }
    ReturnBounds::default()
}

/// The raw text survives as display only when it says something
fn raw_fallback(fund: &Fund) -> Option<String> {
    let raw = fund.return_target.as_deref()?.trim();
    if raw.is_empty() || is_no_value_sentinel(raw) {
        return None;
    }
    Some(raw.to_string())
}

fn is_no_value_sentinel(text: &str) -> bool {
    text == "Unspecified" || text == "0" || text == "0%" || text.contains("0-0") || text.contains("0–0")
}
