///! O'Reilly catalog search API client
use anyhow::{Context, Result};
use std::time::Duration;

use super::types::SearchResponse;

const SEARCH_API_URL: &str = "https://learning.oreilly.com/api/v2/search/";
const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Thin client around the catalog search endpoint.
///
/// A failed search is final for that title within a run; there is no retry
/// logic. Rerunning with the cache enabled re-attempts failed titles only.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SEARCH_API_URL)
    }

    /// Client against a non-default endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Search the catalog for a title, restricted to the title field.
    ///
    /// Returns the parsed response body on HTTP success. A non-success
    /// status or transport error is returned as an error; callers treat it
    /// as "no data" for that title and keep going.
    pub async fn search(&self, title: &str) -> Result<SearchResponse> {
        let url = format!(
            "{}?query={}&field=title",
            self.base_url,
            urlencoding::encode(title)
        );
        tracing::debug!("Searching for book: {}", title);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context(format!("Failed to send search request for {}", title))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("HTTP error {} for {}", status, title));
        }

        let body: SearchResponse = response
            .json()
            .await
            .context(format!("Failed to parse search response for {}", title))?;

        tracing::debug!("Successfully retrieved data for: {}", title);
        Ok(body)
    }
}
