//! Error types for validation and input loading

use thiserror::Error;

/// Validation failures raised before a projection starts
///
/// No ledger rows are produced when either variant is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReserveError {
    #[error("invalid assumption `{field}`: {reason}")]
    InvalidAssumption { field: &'static str, reason: String },

    #[error("invalid component '{name}': {reason}")]
    InvalidComponent { name: String, reason: String },
}

impl ReserveError {
    pub(crate) fn assumption(field: &'static str, reason: impl Into<String>) -> Self {
        ReserveError::InvalidAssumption { field, reason: reason.into() }
    }

    pub(crate) fn component(name: &str, reason: impl Into<String>) -> Self {
        ReserveError::InvalidComponent {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors reading or writing study data files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
