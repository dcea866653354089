///! Data structures for catalog search responses
///!
///! The search API returns loosely-structured JSON; only the fields the
///! selector needs are typed, everything else is preserved verbatim so
///! cached responses round-trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry from the catalog search API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Result format reported by the catalog (e.g. "book", "video").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Publication timestamp, nominally RFC3339. Kept as a raw JSON value
    /// since the catalog occasionally emits something other than a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<Value>,

    /// All remaining fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResult {
    /// Date-only prefix of `issued` ("2024-03-06T00:00:00Z" -> "2024-03-06").
    ///
    /// Returns None when `issued` is absent or not a string.
    pub fn issued_date(&self) -> Option<&str> {
        let issued = self.issued.as_ref()?.as_str()?;
        Some(issued.split_once('T').map_or(issued, |(date, _)| date))
    }

    pub fn is_book(&self) -> bool {
        self.format.as_deref() == Some("book")
    }
}

/// Top-level search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResponse {
    /// Create a response from a list of results (test and fixture helper).
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        Self {
            results: Some(results),
            extra: Map::new(),
        }
    }
}
