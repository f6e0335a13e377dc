//! strdist Library
//!
//! Levenshtein distance scoring for SOAR automation: fuzzy-duplicate
//! detection of a reference string against a list of candidates.

pub mod args;
pub mod audit;
pub mod config;
pub mod entry;
pub mod error;
pub mod handler;
pub mod markdown;
pub mod scorer;
pub mod utils;

pub use error::{DistResult, DistanceError};
pub use scorer::{compute_distances, ComparisonRequest, ComparisonResult, DistanceScorer};
pub use utils::CostModel;
