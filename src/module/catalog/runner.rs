///! Sequential lookup run
///!
///! Resolves each title in order (cache first when enabled, live fetch
///! otherwise), prints per-title progress, and persists the summary.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::api_client::CatalogClient;
use super::types::SearchResponse;
use super::{cache, selector};

pub struct LookupRunner {
    client: CatalogClient,
    data_dir: PathBuf,
    use_cache: bool,
    request_delay: Duration,
}

impl LookupRunner {
    pub fn new(
        client: CatalogClient,
        data_dir: impl AsRef<Path>,
        use_cache: bool,
        request_delay_ms: u64,
    ) -> Self {
        Self {
            client,
            data_dir: data_dir.as_ref().to_path_buf(),
            use_cache,
            request_delay: Duration::from_millis(request_delay_ms),
        }
    }

    /// Resolve the raw search response for one title.
    ///
    /// Returns the response (if any) and whether a live network fetch
    /// happened. Successful live fetches are stored to the cache, failed
    /// ones never are, so a rerun with the cache enabled re-attempts them.
    async fn resolve(&self, title: &str) -> (Option<SearchResponse>, bool) {
        if self.use_cache {
            if let Some(cached) = cache::load(&self.data_dir, title).await {
                return (Some(cached), false);
            }
        }

        match self.client.search(title).await {
            Ok(response) => {
                if let Err(e) = cache::store(&self.data_dir, title, &response).await {
                    tracing::warn!("Failed to cache response for {}: {:#}", title, e);
                }
                (Some(response), true)
            }
            Err(e) => {
                tracing::error!("Error searching for {}: {:#}", title, e);
                (None, true)
            }
        }
    }

    /// Process every title in order and write the summary mapping.
    pub async fn run(&self, titles: &[String]) -> Result<BTreeMap<String, String>> {
        let mut summary = BTreeMap::new();

        for title in titles {
            tracing::debug!("Processing title: {}", title);

            let (response, fetched_live) = self.resolve(title).await;
            let pub_date = selector::extract_publication_date(title, response.as_ref());

            println!("{}: {}", title, pub_date);
            summary.insert(title.clone(), pub_date);

            // Rate limit only applies to titles that hit the network
            if fetched_live && !self.request_delay.is_zero() {
                tracing::debug!("Waiting {:?} before next request", self.request_delay);
                tokio::time::sleep(self.request_delay).await;
            }
        }

        cache::store_summary(&self.data_dir, &summary).await?;
        Ok(summary)
    }
}
