//! Script Handler
//!
//! Runs one host invocation end to end: argument coercion, scoring, and
//! conversion into result entries.

use crate::args::parse_args_with_default;
use crate::entry::Entry;
use crate::error::DistResult;
use crate::scorer::{ComparisonRequest, ComparisonResult, DistanceScorer};
use serde_json::Value;
use tracing::{info, warn};

/// Outcome of a single invocation
#[derive(Debug)]
pub struct Invocation {
    /// Present when the arguments were valid
    pub request: Option<ComparisonRequest>,
    pub outcome: DistResult<Vec<ComparisonResult>>,
}

impl Invocation {
    /// Result envelope for the host; always exactly one entry
    pub fn entries(&self) -> Vec<Entry> {
        match &self.outcome {
            Ok(results) => vec![Entry::distances(results)],
            Err(e) => vec![Entry::from_error(e)],
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Handle a host argument map with the given scorer settings
pub fn handle(args: &Value, scorer: &DistanceScorer) -> Invocation {
    match parse_args_with_default(args, scorer.threshold) {
        Ok(request) => {
            let outcome = scorer.score(&request);
            if let Ok(results) = &outcome {
                let close = results.iter().filter(|r| r.too_close).count();
                info!(
                    "📏 Scored {} string(s) against '{}': {} too close",
                    results.len(),
                    request.input,
                    close
                );
            }
            Invocation {
                request: Some(request),
                outcome,
            }
        }
        Err(e) => {
            warn!("Rejected arguments: {}", e);
            Invocation {
                request: None,
                outcome: Err(e),
            }
        }
    }
}
