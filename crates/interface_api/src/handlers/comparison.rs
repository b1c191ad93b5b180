//! Comparison handlers
//!
//! This is the routing layer's side of the canonical-slug contract: every
//! comparison request is checked against the canonical form, and anything
//! non-canonical (old links, swapped-order URLs) gets a permanent redirect
//! instead of a rendered page. Only canonical slugs produce content.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tracing::debug;

use core_kernel::FundId;
use domain_comparison::{
    compare_funds, is_canonical_comparison_slug, is_low_value_comparison,
    normalize_comparison_slug, parse_comparison_slug,
};
use domain_fund::Fund;

use crate::dto::{ComparisonResponse, FundResponse, MetricRow};
use crate::error::ApiError;
use crate::AppState;

/// Renders a fund-vs-fund comparison, redirecting non-canonical slugs
pub async fn get_comparison(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    if !is_canonical_comparison_slug(&slug) {
        let canonical = normalize_comparison_slug(&slug);
        debug!(%slug, %canonical, "redirecting non-canonical comparison slug");
        return Ok(Redirect::permanent(&format!("/api/v1/compare/{canonical}")).into_response());
    }

    let parts = parse_comparison_slug(&slug)
        .ok_or_else(|| ApiError::BadRequest(format!("malformed comparison slug: {slug}")))?;

    if parts.fund1_id == parts.fund2_id {
        return Err(ApiError::BadRequest(
            "cannot compare a fund with itself".to_string(),
        ));
    }

    let fund_a = lookup(&state, &parts.fund1_id).await?;
    let fund_b = lookup(&state, &parts.fund2_id).await?;

    let metrics = compare_funds(&fund_a, &fund_b);
    let noindex = is_low_value_comparison(&fund_a, &fund_b);
    if noindex {
        debug!(%slug, "comparison flagged low-value; advising noindex");
    }

    let response = ComparisonResponse {
        slug,
        fund_a: FundResponse::from(&fund_a),
        fund_b: FundResponse::from(&fund_b),
        metrics: metrics.into_iter().map(MetricRow::from).collect(),
        noindex,
    };

    Ok(Json(response).into_response())
}

async fn lookup(state: &AppState, raw_id: &str) -> Result<Fund, ApiError> {
    let id: FundId = raw_id
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("invalid fund id {raw_id:?}: {e}")))?;

    state
        .catalog
        .fund(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("fund {id}")))
}
