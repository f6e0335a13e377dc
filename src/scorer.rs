//! Edit-Distance Scorer
//!
//! Scores a reference string against a list of comparison strings and flags
//! the pairs that are near-duplicates under a closeness threshold.

use crate::config::Config;
use crate::error::{DistResult, DistanceError};
use crate::utils::{distance_with, CostModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Threshold used when the caller supplies none
pub const DEFAULT_THRESHOLD: u64 = 3;

/// A validated scoring request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub input: String,
    pub comparisons: Vec<String>,
    pub threshold: u64,
}

impl ComparisonRequest {
    pub fn new(input: impl Into<String>, comparisons: Vec<String>) -> Self {
        Self {
            input: input.into(),
            comparisons,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Distance between the input string and one comparison string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(rename = "StringA")]
    pub input: String,
    #[serde(rename = "StringB")]
    pub comparison: String,
    #[serde(rename = "LevenshteinDistance")]
    pub distance: usize,
    #[serde(rename = "TooClose")]
    pub too_close: bool,
}

/// True when the strings differ but by fewer edits than `threshold`
pub fn is_too_close(distance: usize, threshold: u64) -> bool {
    distance > 0 && (distance as u64) < threshold
}

/// Score `input` against every comparison string with the standard cost rule
pub fn compute_distances(
    input: &str,
    comparisons: &[String],
    threshold: u64,
) -> DistResult<Vec<ComparisonResult>> {
    compute_distances_with(input, comparisons, threshold, CostModel::Standard)
}

/// Score `input` against every comparison string under `model`
///
/// Results keep the order of `comparisons`.
pub fn compute_distances_with(
    input: &str,
    comparisons: &[String],
    threshold: u64,
    model: CostModel,
) -> DistResult<Vec<ComparisonResult>> {
    if comparisons.is_empty() {
        return Err(DistanceError::MissingCompareString);
    }
    if input.is_empty() {
        return Err(DistanceError::MissingInputString);
    }

    Ok(score_all(input, comparisons, threshold, model))
}

/// Unvalidated scoring; an empty comparison list yields an empty result
pub fn score_all(
    input: &str,
    comparisons: &[String],
    threshold: u64,
    model: CostModel,
) -> Vec<ComparisonResult> {
    comparisons
        .iter()
        .map(|comparison| {
            let distance = distance_with(comparison, input, model);
            debug!("'{}' vs '{}': {}", input, comparison, distance);
            ComparisonResult {
                input: input.to_string(),
                comparison: comparison.clone(),
                distance,
                too_close: is_too_close(distance, threshold),
            }
        })
        .collect()
}

/// Scorer settings that outlive a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceScorer {
    pub threshold: u64,
    pub cost_model: CostModel,
}

impl Default for DistanceScorer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            cost_model: CostModel::Standard,
        }
    }
}

impl DistanceScorer {
    pub fn new(threshold: u64, cost_model: CostModel) -> Self {
        Self {
            threshold,
            cost_model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_threshold, config.cost_model)
    }

    /// Score a request; the request's own threshold wins
    pub fn score(&self, request: &ComparisonRequest) -> DistResult<Vec<ComparisonResult>> {
        compute_distances_with(
            &request.input,
            &request.comparisons,
            request.threshold,
            self.cost_model,
        )
    }

    /// Build a request that uses this scorer's default threshold
    pub fn request(&self, input: impl Into<String>, comparisons: Vec<String>) -> ComparisonRequest {
        ComparisonRequest::new(input, comparisons).with_threshold(self.threshold)
    }
}
