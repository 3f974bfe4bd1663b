//! Error types for the instagram-downloader application.

use thiserror::Error;

/// Main error type for the application.
///
/// The first five variants form the closed taxonomy of the core pipeline:
/// every failure inside URL extraction and image downloading is mapped to
/// exactly one of them at the point it is detected. The remaining variants
/// belong to the surrounding layers (configuration, directory bootstrap).
#[derive(Error, Debug)]
pub enum Error {
    // Core pipeline errors
    #[error("Invalid post URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Save failed: {0}")]
    Save(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors (orchestrator-side filesystem work only; the downloader
    // maps its own write failures to `Save`)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes, one per failure family.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_URL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const PARSING_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const CONFIG_ERROR: i32 = 5;
    pub const SOME_IMAGES_FAILED: i32 = 6;
    pub const UNEXPECTED_ERROR: i32 = 7;
}
