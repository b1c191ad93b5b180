//! Fund handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::FundId;

use crate::dto::FundResponse;
use crate::error::ApiError;
use crate::AppState;

/// Lists all funds in the directory
pub async fn list_funds(State(state): State<AppState>) -> Result<Json<Vec<FundResponse>>, ApiError> {
    let funds = state.catalog.list_funds().await?;
    Ok(Json(funds.iter().map(FundResponse::from).collect()))
}

/// Gets a single fund by id
pub async fn get_fund(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FundResponse>, ApiError> {
    let id: FundId = id
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("invalid fund id: {e}")))?;

    let fund = state
        .catalog
        .fund(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("fund {id}")))?;

    Ok(Json(FundResponse::from(&fund)))
}
