//! Product filter service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request       ┌──────────────────────────────────────────────┐
//!     ─────────────────────┼─▶ http::server ──▶ http::handlers            │
//!                          │                        │                     │
//!                          │                        ▼                     │
//!                          │               filtering::engine              │
//!                          │                   │        │                 │
//!                          │                   ▼        ▼                 │
//!                          │      condition_sets   statistics             │
//!                          │                   │                          │
//!                          │                   ▼                          │
//!                          │          catalog (Arc, immutable)            │
//!                          │                                              │
//!                          │  config · observability · lifecycle          │
//!                          └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use product_filter::catalog::Catalog;
use product_filter::config;
use product_filter::lifecycle::{self, signals, Shutdown};
use product_filter::observability::logging;

#[derive(Parser)]
#[command(name = "product-filter")]
#[command(about = "Set-intersection product filter service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "PRODUCT_FILTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::resolve_config(args.config.as_deref(), args.bind)?;

    logging::init_logging(&config.observability);

    tracing::info!("product-filter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    lifecycle::start(config, Catalog::builtin(), &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
