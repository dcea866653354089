///! Reading the input title list
use anyhow::{Context, Result};
use std::path::Path;

/// Read book titles from a file.
///
/// The file holds one entry per blank-line-separated block; the first
/// non-blank line of each block is the title, the remaining lines are
/// metadata (publisher, formats, sizes) and are skipped.
pub fn read_titles(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    tracing::debug!("Reading titles from file: {}", path.display());

    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read title list {:?}", path))?;

    let titles = parse_titles(&content);
    tracing::debug!("Read {} titles from {}", titles.len(), path.display());
    Ok(titles)
}

fn parse_titles(content: &str) -> Vec<String> {
    let mut titles = Vec::new();
    let mut in_entry = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            in_entry = false;
            continue;
        }
        if !in_entry {
            tracing::debug!("Found title: {}", line);
            titles.push(line.to_string());
            in_entry = true;
        }
    }

    titles
}
