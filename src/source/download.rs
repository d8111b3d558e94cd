//! Streaming download of the release archive.

use crate::error::{PackagerError, Result};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Downloads `url` into `file`, chunk by chunk.
///
/// Returns the number of bytes written. The file is flushed but its cursor is
/// left at the end.
pub async fn download_to_file(
    client: &reqwest::Client,
    url: &Url,
    file: &mut tokio::fs::File,
) -> Result<u64> {
    log::info!("Downloading {}", url);

    let fetch_error = |reason: String| PackagerError::Fetch {
        url: url.to_string(),
        reason,
    };

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| fetch_error(format!("request failed: {}", e)))?
        .error_for_status()
        .map_err(|e| fetch_error(e.to_string()))?;

    let mut written = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| fetch_error(format!("failed to read response: {}", e)))?
    {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    log::debug!("Downloaded {} bytes from {}", written, url);
    Ok(written)
}
