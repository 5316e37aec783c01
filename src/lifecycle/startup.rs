//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Bind the listener
//! - Hand the catalog to the HTTP server and serve until shutdown

use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;

/// Fatal errors raised while bringing the service up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the service until `shutdown` is triggered.
pub async fn start(
    config: AppConfig,
    catalog: Catalog,
    shutdown: &Shutdown,
) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        products = catalog.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Catalog loaded"
    );

    let server = HttpServer::new(config, Arc::new(catalog));
    server
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)
}
