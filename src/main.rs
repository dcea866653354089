use bookdates::config::AppConfig;
use bookdates::logging;
use bookdates::module::catalog::{CatalogClient, LookupRunner, cache, titles};

use anyhow::Result;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load("config.toml")?;

    // Initialize logging
    let _logging_guard = logging::init_logging("logs", "bookdates", &config.log_level);

    tracing::debug!("Starting book search run");

    let data_dir = Path::new(&config.data_dir);
    cache::ensure_data_dir(data_dir).await?;

    let title_list = titles::read_titles(&config.titles_file)?;
    tracing::info!(
        "Looking up {} titles from {} (cache {})",
        title_list.len(),
        config.titles_file,
        if config.use_cache { "enabled" } else { "disabled" }
    );

    let client = CatalogClient::new()?;
    let runner = LookupRunner::new(client, data_dir, config.use_cache, config.request_delay_ms);

    let summary = runner.run(&title_list).await?;

    tracing::info!(
        "Wrote {} publication dates to {}",
        summary.len(),
        data_dir.join(cache::SUMMARY_FILE).display()
    );

    Ok(())
}
