//! Config - Application Configuration
//!
//! Persisted as TOML in the platform configuration directory.

use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_VIEWPORT_ROWS,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

use super::mode::LoadMode;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where pages come from
    pub source: SourceConfig,
    /// Browsing behaviour
    pub browse: BrowseConfig,
    /// Presentation settings
    pub ui: UiConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// Kind of data source adapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Remote GraphQL endpoint
    #[default]
    Graphql,
    /// Pages read from a local JSON file
    Fixture,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// JSON file with pages, used when `kind = "fixture"`
    pub fixture_path: Option<PathBuf>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Graphql,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fixture_path: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Browsing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowseConfig {
    /// Mode active at startup
    pub default_mode: LoadMode,
    /// Rows visible in the terminal viewport
    pub viewport_rows: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_mode: LoadMode::Pagination,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Language tag ("en", "de"); detected from the system when unset
    pub locale: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Write a daily rolling log file into the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

/// Primary language subtag of a system locale ("de-AT" -> "de", "de" -> "de")
fn primary_language(tag: &str) -> Option<&str> {
    tag.split([',', '-', '_'])
        .next()
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
}

/// Path of the configuration file, creating the directory if needed
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Load the configuration from the platform config directory
    pub fn try_load() -> Result<Self> {
        let path = config_path()?;
        let mut config = Self::load_from(&path)?;

        // Detect system locale if not set
        if config.ui.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let system = SystemLocale::current().to_string();
            config.ui.locale = primary_language(&system).map(str::to_string);
        }

        Ok(config)
    }

    /// Load from an explicit path; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(config)
    }

    /// Save to the platform config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[browse]\ndefault_mode = \"infinite-scroll\"\n\n[ui]\nlocale = \"de\"\n",
        )
        .expect("write");

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.browse.default_mode, LoadMode::InfiniteScroll);
        assert_eq!(config.browse.viewport_rows, DEFAULT_VIEWPORT_ROWS);
        assert_eq!(config.ui.locale.as_deref(), Some("de"));
        assert_eq!(config.source.kind, SourceKind::Graphql);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.source.kind = SourceKind::Fixture;
        config.source.fixture_path = Some(PathBuf::from("/tmp/pages.json"));
        config.log.file = false;
        config.save_to(&path).expect("save");

        assert_eq!(AppConfig::load_from(&path).expect("load"), config);
    }

    #[test]
    fn primary_language_with_and_without_region() {
        assert_eq!(primary_language("de"), Some("de"));
        assert_eq!(primary_language("de-AT"), Some("de"));
        assert_eq!(primary_language("en_US"), Some("en"));
        assert_eq!(primary_language("en-US,fr-FR"), Some("en"));
        assert_eq!(primary_language(""), None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browse\n").expect("write");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
