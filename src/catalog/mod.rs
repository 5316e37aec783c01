//! Product catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Process start:
//!     Catalog::builtin() (or Catalog::new with validation)
//!     → Arc<Catalog> (immutable for the process lifetime)
//!     → shared with the filter engine and handlers
//! ```
//!
//! # Design Decisions
//! - Products are never mutated after load
//! - Ids are positive and unique; checked on construction
//! - Iteration order is insertion order and is the order of every response

pub mod product;
pub mod store;

pub use product::{Category, Product, ProductId};
pub use store::{Catalog, CatalogError};
