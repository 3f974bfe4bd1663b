//! Configuration module for the instagram-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ClientConfig, Config, OptionsConfig};
pub use validation::validate_config;
