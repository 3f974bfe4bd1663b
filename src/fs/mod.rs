//! Filesystem module.
//!
//! Provides:
//! - Directory bootstrap
//! - Filename derivation and sanitization

pub mod naming;
pub mod paths;

pub use naming::{filename_for_url, sanitize_filename};
pub use paths::ensure_dir;
