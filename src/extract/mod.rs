//! Post URL validation and image URL extraction.
//!
//! Stage one of the pipeline: validate the post URL's shape, fetch the post
//! page, and return the image URLs advertised via its `og:image` metadata.

pub mod meta;

pub use meta::collect_og_images;

use regex::Regex;
use std::sync::LazyLock;

use crate::client::HttpClient;
use crate::error::{Error, Result};

/// Required prefix for Instagram post URLs.
pub const POST_URL_PREFIX: &str = "https://www.instagram.com/p/";

static SHORTCODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.instagram\.com/p/([A-Za-z0-9_-]+)")
        .expect("Failed to parse shortcode pattern - this is a bug")
});

/// Extract the post shortcode from a post URL, for display purposes.
pub fn post_shortcode(post_url: &str) -> Option<String> {
    SHORTCODE_PATTERN
        .captures(post_url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Validate the shape of a post URL.
///
/// This is a local, zero-I/O check: it must pass before any network
/// activity happens.
pub fn validate_post_url(post_url: &str) -> Result<()> {
    if post_url.is_empty() || !post_url.starts_with(POST_URL_PREFIX) {
        return Err(Error::InvalidUrl(format!(
            "Invalid Instagram post URL format: '{}'. URL must start with '{}'.",
            post_url, POST_URL_PREFIX
        )));
    }

    Ok(())
}

/// Extract image URLs from a public Instagram post URL.
///
/// Validates the URL shape, fetches the page, and scans it for `og:image`
/// metadata. Relying on the social-preview tags keeps this independent of
/// Instagram's page internals, at the cost of missing carousel items not
/// exposed through them.
pub async fn extract_image_urls(client: &HttpClient, post_url: &str) -> Result<Vec<String>> {
    validate_post_url(post_url)?;
    fetch_image_urls(client, post_url).await
}

/// Fetch a post page and extract its `og:image` URLs.
///
/// Assumes `page_url` has already passed the post-URL shape check.
pub async fn fetch_image_urls(client: &HttpClient, page_url: &str) -> Result<Vec<String>> {
    let response = client
        .get(page_url)
        .await
        .map_err(|e| classify_transport_error(e, page_url))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::InvalidUrl(format!(
            "Instagram post not found (404) at URL: {}",
            page_url
        )));
    }
    if status.is_client_error() {
        return Err(Error::InvalidUrl(format!(
            "Client error ({}) accessing Instagram URL: {}. The post may be private or access-restricted.",
            status.as_u16(),
            page_url
        )));
    }
    if status.is_server_error() {
        return Err(Error::Network(format!(
            "Instagram server error ({}) for URL: {}. Please try again later.",
            status.as_u16(),
            page_url
        )));
    }
    if !status.is_success() {
        return Err(Error::Network(format!(
            "Unexpected HTTP status {} for URL: {}",
            status.as_u16(),
            page_url
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_transport_error(e, page_url))?;

    let image_urls = meta::collect_og_images(&body);
    if image_urls.is_empty() {
        return Err(Error::Parsing(format!(
            "No og:image metadata found at {}. The post may be private, contain no images, or the page structure may have changed.",
            page_url
        )));
    }

    tracing::info!("Found {} image URL(s) at {}", image_urls.len(), page_url);

    Ok(image_urls)
}

/// Map a transport-level failure on the page fetch to `Network`.
fn classify_transport_error(err: reqwest::Error, url: &str) -> Error {
    if err.is_timeout() {
        Error::Network(format!("Request timed out for {}: {}", url, err))
    } else if err.is_connect() {
        Error::Network(format!("Connection error for {}: {}", url, err))
    } else {
        Error::Network(format!("Network request error for {}: {}", url, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_post_urls() {
        assert!(validate_post_url("https://www.instagram.com/p/Cxyz123abc/").is_ok());
        assert!(validate_post_url("https://www.instagram.com/p/A_b-1/").is_ok());
    }

    #[test]
    fn test_validate_rejects_other_urls() {
        assert!(validate_post_url("").is_err());
        assert!(validate_post_url("https://www.instagram.com/someuser/").is_err());
        assert!(validate_post_url("http://www.instagram.com/p/Cxyz123abc/").is_err());
        assert!(validate_post_url("https://example.com/p/Cxyz123abc/").is_err());
    }

    #[test]
    fn test_post_shortcode() {
        assert_eq!(
            post_shortcode("https://www.instagram.com/p/Cxyz123abc/"),
            Some("Cxyz123abc".to_string())
        );
        assert_eq!(post_shortcode("https://www.instagram.com/p/"), None);
        assert_eq!(post_shortcode("https://example.com/p/abc/"), None);
    }
}
