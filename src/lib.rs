//! Product filter service library.
//!
//! A fixed catalog filtered by intersecting one condition set from each of
//! three dimensions (category, price bracket, free shipping), served over
//! HTTP with Axum.

pub mod catalog;
pub mod config;
pub mod filtering;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use filtering::FilterEngine;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
