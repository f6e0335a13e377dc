//! Result Entries
//!
//! JSON-serializable envelope handed back to the orchestration host.

use crate::error::DistanceError;
use crate::markdown::table_to_markdown;
use crate::scorer::ComparisonResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Title and column order of the human-readable distance table
pub const DISTANCES_TITLE: &str = "Distances";
pub const DISTANCE_HEADERS: [&str; 4] = ["StringA", "StringB", "LevenshteinDistance", "TooClose"];

/// Host entry kinds, serialized as the host's numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum EntryType {
    Note,
    Error,
}

impl From<EntryType> for u8 {
    fn from(kind: EntryType) -> Self {
        match kind {
            EntryType::Note => 1,
            EntryType::Error => 4,
        }
    }
}

impl TryFrom<u8> for EntryType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            1 => Ok(EntryType::Note),
            4 => Ok(EntryType::Error),
            other => Err(format!("unknown entry type {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentsFormat {
    Json,
    Text,
    Markdown,
}

/// One item of the result envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Type")]
    pub kind: EntryType,
    #[serde(rename = "ContentsFormat")]
    pub contents_format: ContentsFormat,
    #[serde(rename = "Contents")]
    pub contents: Value,
    #[serde(rename = "HumanReadable", skip_serializing_if = "Option::is_none", default)]
    pub human_readable: Option<String>,
    #[serde(
        rename = "ReadableContentsFormat",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub readable_contents_format: Option<ContentsFormat>,
}

impl Entry {
    /// Note entry carrying the distances and their markdown table
    pub fn distances(results: &[ComparisonResult]) -> Self {
        Self {
            kind: EntryType::Note,
            contents_format: ContentsFormat::Json,
            contents: json!({ "Distances": results }),
            human_readable: Some(distances_markdown(results)),
            readable_contents_format: Some(ContentsFormat::Markdown),
        }
    }

    /// Plain-text error entry
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: EntryType::Error,
            contents_format: ContentsFormat::Text,
            contents: Value::String(message.into()),
            human_readable: None,
            readable_contents_format: None,
        }
    }

    /// Error entry worded the way the host expects for each failure
    pub fn from_error(err: &DistanceError) -> Self {
        match err {
            DistanceError::MissingCompareString => {
                Self::error("Unable to extract compareString from arguments")
            }
            DistanceError::MissingInputString => Self::error("Unable to extract inputString"),
            other => Self::error(other.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryType::Error
    }
}

/// Markdown table of distance results
pub fn distances_markdown(results: &[ComparisonResult]) -> String {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                r.input.clone(),
                r.comparison.clone(),
                r.distance.to_string(),
                bool_cell(r.too_close).to_string(),
            ]
        })
        .collect();
    table_to_markdown(DISTANCES_TITLE, &DISTANCE_HEADERS, &rows)
}

/// Host tables print booleans capitalized
fn bool_cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
