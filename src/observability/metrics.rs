//! Metrics collection and exposition.
//!
//! # Metrics
//! - `product_filter_requests_total` (counter): requests by method, path, status
//! - `product_filter_request_duration_seconds` (histogram): latency distribution
//! - `product_filter_matches` (histogram): products matched per filter call
//! - `product_filter_rejected_total` (counter): unknown labels by dimension

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::filtering::Dimension;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one completed HTTP request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let path = path.to_string();
    let status = status.to_string();

    ::metrics::counter!(
        "product_filter_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    ::metrics::histogram!(
        "product_filter_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the size of a filter result.
pub fn record_matches(matched_count: usize) {
    ::metrics::histogram!("product_filter_matches").record(matched_count as f64);
}

/// Record a filter request rejected for an unknown label.
pub fn record_rejected(dimension: Dimension) {
    ::metrics::counter!("product_filter_rejected_total", "dimension" => dimension.as_str())
        .increment(1);
}
