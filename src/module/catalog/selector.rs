///! Best-match selection over catalog search results
///!
///! Filters search results down to book-format candidates, ranks them by
///! publication date (newest first), and extracts the winning date.

use chrono::NaiveDate;
use std::cmp::Reverse;

use super::types::{SearchResponse, SearchResult};

/// Sentinel returned when no usable publication date could be determined.
pub const NOT_FOUND: &str = "Not found";

/// Sort key for candidates with a missing or unparsable `issued` value.
/// Treated as the oldest possible publication so they rank last.
fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid fallback date")
}

fn sort_key(candidate: &SearchResult) -> NaiveDate {
    candidate
        .issued_date()
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .unwrap_or_else(fallback_date)
}

/// Find the best matching book for `title` among the search results.
///
/// Selection criteria:
/// 1. Must be a book format
/// 2. Among books, choose the newest publication
///
/// Candidates with equal publication dates keep their original relative
/// order; no secondary ranking by title similarity is performed.
pub fn find_best_match<'a>(
    title: &str,
    response: Option<&'a SearchResponse>,
) -> Option<&'a SearchResult> {
    let results = response?.results.as_deref()?;
    if results.is_empty() {
        tracing::debug!("No results for '{}'", title);
        return None;
    }

    tracing::debug!("Considering {} results for '{}'", results.len(), title);

    let mut candidates: Vec<&SearchResult> = results.iter().filter(|r| r.is_book()).collect();

    if candidates.is_empty() {
        tracing::debug!("No book format results for '{}'", title);
        return None;
    }

    tracing::debug!("Found {} book candidates", candidates.len());
    for candidate in &candidates {
        tracing::debug!(
            "Candidate: {:?} (issued: {:?})",
            candidate.title,
            candidate.issued
        );
    }

    // Newest publication first; stable, so equal dates keep list order
    candidates.sort_by_key(|c| Reverse(sort_key(c)));

    let best = candidates[0];
    tracing::debug!(
        "Selected best match: {:?} (issued: {:?})",
        best.title,
        best.issued
    );
    Some(best)
}

/// Extract the publication date of the best match, or [`NOT_FOUND`].
pub fn extract_publication_date(title: &str, response: Option<&SearchResponse>) -> String {
    match find_best_match(title, response).and_then(|best| best.issued_date()) {
        Some(date) => date.to_string(),
        None => {
            tracing::debug!("No publication date found for '{}'", title);
            NOT_FOUND.to_string()
        }
    }
}
