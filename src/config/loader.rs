//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in seconds, covering connect and body read.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Browser user agent string. Instagram serves stripped-down pages to
    /// clients that do not identify as a browser.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Download and naming options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory images are saved into.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Extension used for synthetic filenames and unrecognized extensions.
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// Extensions accepted as-is when deriving filenames from image URLs.
    #[serde(default = "default_recognized_extensions")]
    pub recognized_extensions: Vec<String>,

    /// Whether to show per-download progress output.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            default_extension: default_extension(),
            recognized_extensions: default_recognized_extensions(),
            show_downloads: true,
        }
    }
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string()
}

fn default_extension() -> String {
    "jpg".to_string()
}

fn default_recognized_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "gif", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
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

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("instagram_downloads"))
    }
}
