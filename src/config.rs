use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_titles_file")]
    pub titles_file: String,

    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Serve titles from cached responses when a valid entry exists.
    #[serde(default)]
    pub use_cache: bool,

    /// Delay after each live catalog request, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_titles_file() -> String {
    "titles.txt".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            titles_file: default_titles_file(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            use_cache: false,
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, else defaults, then apply the
    /// USE_CACHE / DEBUG environment toggles on top.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        if env_flag("USE_CACHE") {
            config.use_cache = true;
        }
        if env_flag("DEBUG") {
            config.log_level = "debug".to_string();
        }

        Ok(config)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
