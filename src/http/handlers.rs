//! Request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, Uri},
    Json,
};
use serde::Serialize;

use crate::catalog::Product;
use crate::filtering::{FilterOutcome, FilterRequest, Statistics};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub total_count: usize,
}

/// `POST /filter`: intersect the three selected condition sets.
pub async fn filter_products(
    State(state): State<AppState>,
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<FilterOutcome>, ApiError> {
    let Json(request) = payload.inspect_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected filter body");
    })?;

    let outcome = state.engine.filter_request(&request).map_err(|error| {
        tracing::warn!(
            dimension = %error.dimension(),
            %error,
            "Rejected filter request"
        );
        metrics::record_rejected(error.dimension());
        error
    })?;

    tracing::debug!(
        expression = %outcome.expression,
        matched_count = outcome.matched_count,
        "Filter applied"
    );
    metrics::record_matches(outcome.matched_count);

    Ok(Json(outcome))
}

/// `GET /statistics`: sizes of the category and price-bracket sets.
pub async fn get_statistics(State(state): State<AppState>) -> Json<Statistics> {
    Json(state.engine.statistics())
}

/// `GET /products`: the full catalog in order.
pub async fn list_products(State(state): State<AppState>) -> Json<ProductList> {
    let catalog = state.engine.catalog();
    Json(ProductList {
        products: catalog.products().to_vec(),
        total_count: catalog.len(),
    })
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        total_count: state.engine.catalog().len(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Fallback for known routes hit with the wrong method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
