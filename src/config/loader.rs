//! Configuration structures and loading logic.

use crate::api::ItemType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// Board targeting and credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board ID as shown in the board URL.
    #[serde(default)]
    pub board_id: String,

    /// Personal access token or OAuth token with `boards:read` scope.
    #[serde(default)]
    pub access_token: String,
}

/// Export options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Destination directory for saved files.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Whether to also scan document items.
    #[serde(default)]
    pub include_documents: bool,

    /// Suppress per-item log lines.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            include_documents: false,
            quiet: false,
        }
    }
}

/// Remote API and request pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API, without a trailing `/boards`.
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Items requested per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Delay between listing pages, in milliseconds.
    #[serde(default = "default_page_delay")]
    pub page_delay_ms: u64,

    /// Delay before each candidate URL probe, in milliseconds.
    #[serde(default = "default_probe_delay")]
    pub probe_delay_ms: u64,

    /// Timeout for probe, HEAD and download requests.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Timeout for listing requests.
    #[serde(default = "default_listing_timeout")]
    pub listing_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            page_size: default_page_size(),
            page_delay_ms: default_page_delay(),
            probe_delay_ms: default_probe_delay(),
            request_timeout_secs: default_request_timeout(),
            listing_timeout_secs: default_listing_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn listing_timeout(&self) -> Duration {
        Duration::from_secs(self.listing_timeout_secs)
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("svgs")
}

fn default_api_root() -> String {
    "https://api.miro.com/v2".to_string()
}

fn default_page_size() -> u32 {
    50
}

// Miro allows at most 4 listing requests per second.
fn default_page_delay() -> u64 {
    250
}

fn default_probe_delay() -> u64 {
    300
}

fn default_request_timeout() -> u64 {
    10
}

fn default_listing_timeout() -> u64 {
    20
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Item types to scan, in scan order.
    pub fn item_types(&self) -> Vec<ItemType> {
        ItemType::SCAN_ORDER
            .iter()
            .copied()
            .filter(|t| *t != ItemType::Document || self.options.include_documents)
            .collect()
    }

    /// Get the effective output directory, with a leading `~` expanded.
    pub fn output_directory(&self) -> PathBuf {
        let dir = &self.options.output_directory;
        let Ok(rest) = dir.strip_prefix("~") else {
            return dir.clone();
        };

        match directories::BaseDirs::new() {
            Some(base) => base.home_dir().join(rest),
            None => dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.options.output_directory, PathBuf::from("svgs"));
        assert_eq!(config.api.page_size, 50);
        assert_eq!(config.api.page_delay(), Duration::from_millis(250));
        assert_eq!(config.api.probe_delay(), Duration::from_millis(300));
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.api.listing_timeout(), Duration::from_secs(20));
        assert!(!config.options.include_documents);
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [board]
            board_id = "uXjVabc="
            access_token = "secret"

            [api]
            page_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.board.board_id, "uXjVabc=");
        assert_eq!(config.api.page_delay_ms, 0);
        assert_eq!(config.api.probe_delay_ms, 300);
    }

    #[test]
    fn test_item_types_without_documents() {
        let config = Config::default();
        let types = config.item_types();
        assert_eq!(types.first(), Some(&ItemType::Image));
        assert!(!types.contains(&ItemType::Document));
        assert_eq!(types.len(), 6);
    }

    #[test]
    fn test_item_types_with_documents() {
        let mut config = Config::default();
        config.options.include_documents = true;
        let types = config.item_types();
        assert_eq!(types[1], ItemType::Document);
        assert_eq!(types.len(), 7);
    }

    #[test]
    fn test_output_directory_plain() {
        let mut config = Config::default();
        config.options.output_directory = PathBuf::from("/tmp/out");
        assert_eq!(config.output_directory(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/board.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
