//! Zip extraction of the downloaded release.

use crate::error::{PackagerError, Result};
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Extracts the whole zip in `archive` into `destination`.
///
/// Entry paths are kept as they are in the archive; the `zip` crate refuses
/// entries escaping `destination`. Runs on the blocking pool.
pub async fn extract_zip(mut archive: File, destination: &Path, url: &str) -> Result<usize> {
    let destination: PathBuf = destination.to_path_buf();
    let url = url.to_string();

    tokio::task::spawn_blocking(move || -> Result<usize> {
        archive.seek(SeekFrom::Start(0))?;

        let invalid = |reason: String| PackagerError::Fetch {
            url: url.clone(),
            reason,
        };

        let mut zip = zip::ZipArchive::new(archive)
            .map_err(|e| invalid(format!("response body is not a zip archive: {}", e)))?;
        let entries = zip.len();

        zip.extract(&destination)
            .map_err(|e| invalid(format!("failed to extract archive: {}", e)))?;

        log::info!("Extracted {} entries into {}", entries, destination.display());
        Ok(entries)
    })
    .await
    .map_err(|e| {
        PackagerError::Io(std::io::Error::other(format!(
            "extraction task failed: {}",
            e
        )))
    })?
}
