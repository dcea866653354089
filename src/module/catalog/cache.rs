///! On-disk cache of raw catalog responses
///!
///! One pretty-printed JSON file per title in the data directory, plus the
///! final summary mapping of title to publication date.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::types::SearchResponse;

/// File name of the title -> publication date summary.
pub const SUMMARY_FILE: &str = "publication_dates.json";

/// Convert a title to a safe cache file name.
///
/// Every non-alphanumeric character becomes a dash, runs of dashes collapse
/// to a single dash, and leading/trailing dashes are dropped. Distinct
/// titles can sanitize to the same name ("Test & More" / "Test - More") and
/// then share a cache slot, last write wins. A title with no alphanumeric
/// characters at all sanitizes to just ".json".
pub fn sanitize_filename(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    let collapsed = replaced
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{}.json", collapsed)
}

/// Path of the cache entry for a title.
pub fn entry_path(data_dir: &Path, title: &str) -> PathBuf {
    data_dir.join(sanitize_filename(title))
}

/// Ensure the data directory exists.
pub async fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    tracing::debug!("Creating data directory: {}", data_dir.display());
    fs::create_dir_all(data_dir)
        .await
        .context(format!("Failed to create data directory {:?}", data_dir))
}

/// Load the cached response for a title.
///
/// A missing file, unreadable file, or unparsable JSON all count as a cache
/// miss; the caller falls back to a live fetch.
pub async fn load(data_dir: &Path, title: &str) -> Option<SearchResponse> {
    let path = entry_path(data_dir, title);

    if !path.exists() {
        tracing::debug!("No cached result at {}, using API", path.display());
        return None;
    }

    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                "Error reading cached file {}: {}, falling back to API",
                path.display(),
                e
            );
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(response) => {
            tracing::debug!("Loaded cached result from {}", path.display());
            Some(response)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse cached file {}: {}, falling back to API",
                path.display(),
                e
            );
            None
        }
    }
}

/// Store a raw response under the title's cache slot, overwriting any
/// previous entry.
pub async fn store(data_dir: &Path, title: &str, response: &SearchResponse) -> Result<()> {
    let path = entry_path(data_dir, title);
    let json = serde_json::to_string_pretty(response)
        .context(format!("Failed to serialize response for {}", title))?;

    fs::write(&path, json)
        .await
        .context(format!("Failed to write cache file {:?}", path))?;

    tracing::debug!("Saved result to {}", path.display());
    Ok(())
}

/// Write the summary mapping as a single pretty-printed JSON object.
pub async fn store_summary(data_dir: &Path, summary: &BTreeMap<String, String>) -> Result<PathBuf> {
    let path = data_dir.join(SUMMARY_FILE);
    let json =
        serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;

    fs::write(&path, json)
        .await
        .context(format!("Failed to write summary file {:?}", path))?;

    tracing::debug!("Results saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("Head First Software Architecture"),
            "Head-First-Software-Architecture.json"
        );
        assert_eq!(sanitize_filename("Test & More!"), "Test-More.json");
        assert_eq!(sanitize_filename("Multiple   Spaces"), "Multiple-Spaces.json");
    }

    #[test]
    fn test_sanitize_filename_edges() {
        assert_eq!(sanitize_filename("--leading--trailing--"), "leading-trailing.json");
        // No alphanumeric characters: collides at the empty basename
        assert_eq!(sanitize_filename("!!!"), ".json");
        // Unicode letters survive
        assert_eq!(sanitize_filename("Rust für Profis"), "Rust-für-Profis.json");
    }

    #[test]
    fn test_colliding_titles_share_a_slot() {
        assert_eq!(sanitize_filename("Test & More"), sanitize_filename("Test - More"));
    }

    #[tokio::test]
    async fn test_store_then_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [{
                "title": "Head First Software Architecture",
                "format": "book",
                "issued": "2024-03-06T00:00:00Z",
                "other_data": "irrelevant"
            }]
        }))
        .unwrap();

        store(temp_dir.path(), "Head First Software Architecture", &response)
            .await
            .unwrap();

        let loaded = load(temp_dir.path(), "Head First Software Architecture")
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&loaded).unwrap(),
            serde_json::to_value(&response).unwrap()
        );
    }

    #[tokio::test]
    async fn test_load_missing_entry_is_miss() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(load(temp_dir.path(), "Never Stored").await.is_none());
    }

    #[tokio::test]
    async fn test_load_corrupt_entry_is_miss() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = entry_path(temp_dir.path(), "Broken Entry");
        fs::write(&path, "{ not json").await.unwrap();

        assert!(load(temp_dir.path(), "Broken Entry").await.is_none());
    }

    #[tokio::test]
    async fn test_store_summary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut summary = BTreeMap::new();
        summary.insert("Sample Title".to_string(), "2024-03-06".to_string());
        summary.insert("Missing Title".to_string(), "Not found".to_string());

        let path = store_summary(temp_dir.path(), &summary).await.unwrap();
        assert_eq!(path.file_name().unwrap(), SUMMARY_FILE);

        let content = fs::read_to_string(&path).await.unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, summary);
    }
}
