//! Shared HTTP client.

use std::time::Duration;

use reqwest::{header, Client, Response};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// HTTP client used by both the extractor and the downloader.
///
/// Wraps a single `reqwest::Client` configured with the browser-identifying
/// user agent and the bounded request timeout. The timeout covers the whole
/// request, connect through body read; there is no retry logic here.
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Build an HTTP client from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Issue a plain GET request.
    ///
    /// Transport failures are returned raw; the caller decides which error
    /// kind they map to (the extractor and the downloader classify them
    /// differently).
    pub async fn get(&self, url: &str) -> reqwest::Result<Response> {
        tracing::debug!("GET {}", url);

        self.client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
    }
}
