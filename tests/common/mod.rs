//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use product_filter::catalog::Catalog;
use product_filter::config::AppConfig;
use product_filter::http::HttpServer;
use product_filter::lifecycle::Shutdown;

/// Router over the built-in catalog with default settings.
#[allow(dead_code)]
pub fn test_app() -> Router {
    HttpServer::new(AppConfig::default(), Arc::new(Catalog::builtin())).router()
}

/// Router over the built-in catalog with the given settings.
#[allow(dead_code)]
pub fn test_app_with(config: AppConfig) -> Router {
    HttpServer::new(config, Arc::new(Catalog::builtin())).router()
}

/// Send one request through the router and decode the JSON body.
#[allow(dead_code)]
pub async fn send(app: Router, request: Request<Body>) -> (axum::http::StatusCode, axum::http::HeaderMap, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("Invalid JSON")
    };
    (status, headers, json)
}

/// A server bound to an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let mut config = AppConfig::default();
        config.listener.bind_address = addr.to_string();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config, Arc::new(Catalog::builtin()));
        let rx = shutdown.subscribe();
        let handle = tokio::spawn(async move { server.run(listener, rx).await });

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop")
            .expect("server task panicked")
            .expect("server returned an error");
    }
}
