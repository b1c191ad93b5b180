//! HTTP API Layer
//!
//! This crate provides the REST API for the fund directory using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for fund listings and comparisons
//! - **DTOs**: response data transfer objects built on the shared formatters
//! - **Error Handling**: consistent error responses
//!
//! The comparison route is where the slug codec's one observable contract
//! lives: a request for a non-canonical slug is answered with a permanent
//! redirect to the canonical form, never rendered in place.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(catalog, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_fund::FundCatalog;

use crate::config::ApiConfig;
use crate::handlers::{comparison, fund, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FundCatalog>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `catalog` - Fund catalog port the handlers read from
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(catalog: Arc<dyn FundCatalog>, config: ApiConfig) -> Router {
    let state = AppState { catalog, config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Fund routes
    let fund_routes = Router::new()
        .route("/", get(fund::list_funds))
        .route("/:id", get(fund::get_fund));

    // Comparison routes
    let comparison_routes = Router::new().route("/:slug", get(comparison::get_comparison));

    let api_routes = Router::new()
        .nest("/funds", fund_routes)
        .nest("/compare", comparison_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
