//! Levenshtein edit distance
//!
//! Edit distance over Unicode scalar values. The standard rule comes from
//! `strsim`; the legacy rule, which never rewards a match, is filled here.

use serde::{Deserialize, Serialize};
use std::fmt;
use strsim::levenshtein;

/// Cost rule applied when filling the distance table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostModel {
    /// Textbook Levenshtein: a matching character costs nothing
    #[default]
    Standard,
    /// Every transition costs 1, even along the diagonal on a match.
    /// Always yields `max(len(a), len(b))`.
    Legacy,
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostModel::Standard => write!(f, "standard"),
            CostModel::Legacy => write!(f, "legacy"),
        }
    }
}

/// Edit distance between two strings using the standard cost rule
pub fn distance(a: &str, b: &str) -> usize {
    distance_with(a, b, CostModel::Standard)
}

/// Edit distance between `a` and `b` under the given cost rule
pub fn distance_with(a: &str, b: &str, model: CostModel) -> usize {
    match model {
        CostModel::Standard => levenshtein(a, b),
        CostModel::Legacy => legacy_distance(a, b),
    }
}

/// Fill the table with the legacy rule: `min(left, up, diag) + 1`
///
/// One row per character of `b` (plus the empty prefix), one column per
/// character of `a`. Only the previous row is kept.
fn legacy_distance(a: &str, b: &str) -> usize {
    let m = a.chars().count();

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for (i, _) in b.chars().enumerate() {
        curr[0] = i + 1;
        for j in 0..m {
            curr[j + 1] = curr[j].min(prev[j + 1]).min(prev[j]) + 1;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_basics() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("abc", "abc"), 0);
        assert_eq!(distance("abc", "abd"), 1);
        assert_eq!(distance("abc", "abcd"), 1);
        assert_eq!(distance("abc", "xyz"), 3);
        assert_eq!(distance("lenght", "length"), 2);
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "hello"), 5);
        assert_eq!(distance("hello", ""), 5);
        assert_eq!(distance_with("", "abc", CostModel::Legacy), 3);
        assert_eq!(distance_with("abcd", "", CostModel::Legacy), 4);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("", "日本"), 2);
        assert_eq!(distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_legacy_cost_rule() {
        // The legacy rule never rewards a match.
        assert_eq!(distance_with("abc", "abc", CostModel::Legacy), 3);
        assert_eq!(distance_with("kitten", "sitting", CostModel::Legacy), 7);
        assert_eq!(distance_with("a", "b", CostModel::Legacy), 1);
        assert_eq!(
            distance_with("sitting", "kitten", CostModel::Legacy),
            distance_with("kitten", "sitting", CostModel::Legacy)
        );
    }

    #[test]
    fn test_cost_model_serde() {
        assert_eq!(
            serde_json::to_string(&CostModel::Legacy).unwrap(),
            "\"legacy\""
        );
        let model: CostModel = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(model, CostModel::Standard);
        assert_eq!(CostModel::default(), CostModel::Standard);
    }
}
