//! Instagram Image Downloader
//!
//! This library fetches a public Instagram post page, extracts the image
//! URLs advertised via its `og:image` social-preview metadata, and
//! downloads each image to local storage.
//!
//! # Features
//!
//! - Post URL validation before any network activity
//! - `og:image` metadata extraction in document order
//! - Streamed, memory-bounded image downloads
//! - A closed error taxonomy distinguishing retryable network failures
//!   from permanent input, parsing, and save failures
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use instagram_downloader::{extract_image_urls, download_image, ClientConfig, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(&ClientConfig::default())?;
//!
//!     let urls = extract_image_urls(&client, "https://www.instagram.com/p/Cxyz123abc/").await?;
//!     for (i, url) in urls.iter().enumerate() {
//!         download_image(&client, url, Path::new(&format!("image_{}.jpg", i + 1))).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use client::HttpClient;
pub use config::{ClientConfig, Config, OptionsConfig};
pub use download::{download_image, RunStats};
pub use error::{Error, Result};
pub use extract::{collect_og_images, extract_image_urls, fetch_image_urls, POST_URL_PREFIX};
