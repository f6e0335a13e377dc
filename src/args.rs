//! Host Argument Coercion
//!
//! The orchestration host passes arguments as a loosely-typed JSON map.
//! This module turns that map into a [`ComparisonRequest`] or fails with a
//! user-facing error.

use crate::error::{DistResult, DistanceError};
use crate::scorer::{ComparisonRequest, DEFAULT_THRESHOLD};
use serde_json::Value;
use tracing::debug;

pub const INPUT_STRING_KEY: &str = "inputString";
pub const COMPARE_STRING_KEY: &str = "compareString";
pub const DISTANCE_KEY: &str = "distance";

/// Coerce a host argument into a list of strings
///
/// Strings are split on commas unless they hold a JSON array literal.
pub fn arg_to_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(Value::String(s)) => {
            if s.is_empty() {
                return Vec::new();
            }
            if s.starts_with('[') && s.ends_with(']') {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(s) {
                    return items.iter().filter_map(scalar_to_string).collect();
                }
            }
            s.split(',').map(|item| item.trim().to_string()).collect()
        }
        Some(other) => scalar_to_string(other).into_iter().collect(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Coerce the `distance` argument into a non-negative threshold
///
/// Absent, null and blank values fall back to `default`. Integral JSON
/// numbers such as `5.0` are accepted; anything outside `0..=u64::MAX` is not.
pub fn coerce_threshold(value: Option<&Value>, default: u64) -> DistResult<u64> {
    match value {
        None | Some(Value::Null) => Ok(default),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(default),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| DistanceError::InvalidThreshold(s.clone())),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(integral_f64))
            .ok_or_else(|| DistanceError::InvalidThreshold(n.to_string())),
        Some(other) => Err(DistanceError::InvalidThreshold(other.to_string())),
    }
}

fn integral_f64(v: f64) -> Option<u64> {
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 {
        Some(v as u64)
    } else {
        None
    }
}

/// Validate a host argument map into a request with the stock threshold
pub fn parse_args(args: &Value) -> DistResult<ComparisonRequest> {
    parse_args_with_default(args, DEFAULT_THRESHOLD)
}

/// Validate a host argument map into a request
///
/// `compareString` is checked before `inputString`, then the threshold.
pub fn parse_args_with_default(
    args: &Value,
    default_threshold: u64,
) -> DistResult<ComparisonRequest> {
    let comparisons = arg_to_list(args.get(COMPARE_STRING_KEY));
    if comparisons.is_empty() {
        return Err(DistanceError::MissingCompareString);
    }

    let input = match args.get(INPUT_STRING_KEY) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(DistanceError::MissingInputString),
    };

    let threshold = coerce_threshold(args.get(DISTANCE_KEY), default_threshold)?;
    debug!(
        "Parsed arguments: {} comparison(s), threshold {}",
        comparisons.len(),
        threshold
    );

    Ok(ComparisonRequest {
        input,
        comparisons,
        threshold,
    })
}
