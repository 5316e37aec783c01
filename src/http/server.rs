//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, metrics)
//! - Keep middleware rejections (408, 413) in the JSON error shape
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::filtering::FilterEngine;
use crate::http::handlers;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::response::ApiError;
use crate::lifecycle::shutdown;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<FilterEngine>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            engine: Arc::new(FilterEngine::new(catalog)),
        }
    }
}

/// HTTP server for the filter service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given catalog.
    pub fn new(config: AppConfig, catalog: Arc<Catalog>) -> Self {
        let router = build_router(&config, AppState::new(catalog));
        Self { router, config }
    }

    /// Run the server until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &AppConfig, state: AppState) -> Router {
    Router::new()
        .route("/filter", post(handlers::filter_products))
        .route("/statistics", get(handlers::get_statistics))
        .route("/products", get(handlers::list_products))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(middleware::from_fn(structured_errors))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id(request),
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}

/// Record per-route request metrics.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics::record_request(&method, &path, response.status().as_u16(), start);
    response
}

/// Rewrite plain-text rejections from the limit and timeout layers.
async fn structured_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge.into_response(),
        StatusCode::REQUEST_TIMEOUT => ApiError::Timeout.into_response(),
        _ => response,
    }
}
