//! Configuration management.
//!
//! Settings are read from a TOML file with `SCHOLAR_SEARCH`-prefixed
//! environment variable overrides:
//!
//! ```toml
//! [provider]
//! base_url = "https://api.semanticscholar.org/graph/v1"
//! page_size = 20
//! api_key = "your-api-key"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 6060
//!
//! [search]
//! default_limit = 10
//! default_year_start = 2000
//! default_year_end = 2024
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// External search provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Search form defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// External search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Candidates fetched per provider page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// API key (optional, for higher rate limits); falls back to the
    /// `SCHOLAR_API_KEY` environment variable
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            api_key: std::env::var("SCHOLAR_API_KEY").ok(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.semanticscholar.org/graph/v1".to_string()
}

fn default_page_size() -> usize {
    20
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    6060
}

/// Defaults for the search form and the CLI search command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default number of results (1-100)
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Default earliest publication year
    #[serde(default = "default_year_start")]
    pub default_year_start: i32,

    /// Default latest publication year
    #[serde(default = "default_year_end")]
    pub default_year_end: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_year_start: default_year_start(),
            default_year_end: default_year_end(),
        }
    }
}

fn default_limit() -> usize {
    10
}

fn default_year_start() -> i32 {
    2000
}

fn default_year_end() -> i32 {
    2024
}

/// Load configuration from a TOML file with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("SCHOLAR_SEARCH"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the working directory, then in the user
/// config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("scholar-search.toml");
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("scholar-search").join("config.toml"))
        .filter(|path| path.exists())
}
