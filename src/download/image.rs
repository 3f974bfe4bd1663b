//! Image file downloading.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::client::HttpClient;
use crate::error::{Error, Result};

/// Download an image from `image_url` and save it to `save_path`.
///
/// The body is streamed to disk chunk by chunk, so large images never sit
/// in memory in full. The file is opened with truncation, so re-invoking
/// with the same arguments overwrites the destination rather than
/// appending. A mid-stream failure may leave a partially written file
/// behind; writes are not atomic.
///
/// The containing directory must already exist.
pub async fn download_image(client: &HttpClient, image_url: &str, save_path: &Path) -> Result<()> {
    let response = client
        .get(image_url)
        .await
        .map_err(|e| classify_fetch_error(e, image_url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Download(format!(
            "HTTP error {} while downloading image {}",
            status.as_u16(),
            image_url
        )));
    }

    let mut file = File::create(save_path)
        .await
        .map_err(|e| save_error(e, save_path))?;

    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| classify_fetch_error(e, image_url))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| save_error(e, save_path))?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| save_error(e, save_path))?;

    tracing::debug!("Wrote {} bytes to {}", written, save_path.display());

    Ok(())
}

/// Map a transport failure on the image fetch.
///
/// Connection failures and timeouts are `Network` (retryable in
/// principle); anything else falls into the downloader's `Download`
/// catch-all, distinct from the extractor's mapping.
fn classify_fetch_error(err: reqwest::Error, url: &str) -> Error {
    if err.is_timeout() {
        Error::Network(format!(
            "Request timed out while downloading image {}: {}",
            url, err
        ))
    } else if err.is_connect() {
        Error::Network(format!(
            "Connection error while downloading image {}: {}",
            url, err
        ))
    } else {
        Error::Download(format!(
            "Network request error while downloading image {}: {}",
            url, err
        ))
    }
}

/// Map a filesystem failure while opening or writing to `Save`.
fn save_error(err: std::io::Error, path: &Path) -> Error {
    Error::Save(format!(
        "File system error saving image to {}: {}",
        path.display(),
        err
    ))
}
