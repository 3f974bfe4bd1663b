//! Download module for image downloading.
//!
//! This module provides:
//! - Streamed image downloading
//! - Download run statistics

pub mod image;
pub mod state;

pub use image::download_image;
pub use state::RunStats;
