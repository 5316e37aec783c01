//! Filtering errors.

use thiserror::Error;

use crate::filtering::labels::Dimension;

/// Errors produced while validating a filter request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A label is not a key of its dimension's mapping.
    #[error("unknown {dimension} label {label:?}")]
    UnknownLabel { dimension: Dimension, label: String },
}

impl FilterError {
    /// The dimension the rejected label was supplied for.
    pub fn dimension(&self) -> Dimension {
        match self {
            FilterError::UnknownLabel { dimension, .. } => *dimension,
        }
    }
}
