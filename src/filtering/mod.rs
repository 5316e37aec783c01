//! Set-based product filtering.
//!
//! # Data Flow
//! ```text
//! FilterRequest (three raw labels)
//!     → labels.rs (validate into a typed FilterQuery)
//!     → condition_sets.rs (dimension → label → id set, rebuilt per call)
//!     → engine.rs (intersect the three selected sets, resolve records)
//!     → FilterOutcome
//!
//! statistics.rs reads the same condition sets and reports set sizes.
//! ```
//!
//! # Design Decisions
//! - Condition sets are a pure function of the catalog; nothing is cached
//! - Output order follows the catalog, never the request
//! - Validation is all-or-nothing: one unknown label rejects the request

pub mod condition_sets;
pub mod engine;
pub mod error;
pub mod labels;
pub mod statistics;

pub use condition_sets::{intersect_all, ConditionSets, IdSet};
pub use engine::{FilterEngine, FilterOutcome, FilterQuery, FilterRequest};
pub use error::FilterError;
pub use labels::{Dimension, PriceBracket, Shipping};
pub use statistics::Statistics;
