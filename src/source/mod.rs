//! Release archive retrieval.
//!
//! Fetches the versioned WinDivert release and unpacks it into the work
//! directory. The [`ArtifactSource`] trait lets the packaging flow run
//! against local fixtures.

mod download;
mod extract;

use crate::error::Result;
use std::path::Path;
use url::Url;

pub use download::download_to_file;
pub use extract::extract_zip;

/// Somewhere a release archive can be fetched from.
#[allow(async_fn_in_trait)]
pub trait ArtifactSource {
    /// Fetches the archive at `url` and extracts it into `destination`.
    ///
    /// On failure `destination` may be partially populated.
    async fn fetch(&self, url: &Url, destination: &Path) -> Result<()>;
}

/// Fetches release archives over HTTP(S) with a single GET.
#[derive(Debug, Clone, Default)]
pub struct HttpArtifactSource {
    client: reqwest::Client,
}

impl HttpArtifactSource {
    /// Creates a source with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source using a preconfigured HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ArtifactSource for HttpArtifactSource {
    async fn fetch(&self, url: &Url, destination: &Path) -> Result<()> {
        // Zip needs random access, so spool the body first.
        let spool = tempfile::tempfile()?;
        let mut file = tokio::fs::File::from_std(spool);

        download_to_file(&self.client, url, &mut file).await?;

        let archive = file.into_std().await;
        extract_zip(archive, destination, url.as_str()).await?;
        Ok(())
    }
}
