//! Error types for input validation and loading

use std::path::PathBuf;
use thiserror::Error;

/// An input value outside the range the projection accepts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between 0 and 100 percent (got {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },

    #[error("sessions per day must be at least 1")]
    ZeroSessions,

    #[error("projection must cover at least one year")]
    ZeroYears,

    #[error("loan term must be at least one year")]
    ZeroLoanTerm,

    #[error("energy-mix cost model selected but no unit costs were supplied")]
    MissingUnitCosts,
}

/// Failure to obtain a usable input set from a file or reader
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed station inputs: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid station inputs: {0}")]
    Invalid(#[from] InputError),
}
