//! strdist Error Types
//!
//! Centralized error handling for the scorer and its host boundary.

use thiserror::Error;

/// Central error type for strdist
#[derive(Error, Debug)]
pub enum DistanceError {
    #[error("missing compareString")]
    MissingCompareString,

    #[error("missing inputString")]
    MissingInputString,

    #[error("invalid distance threshold: {0}")]
    InvalidThreshold(String),
}

/// Result type alias for strdist operations
pub type DistResult<T> = Result<T, DistanceError>;
