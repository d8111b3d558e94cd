//! Binary root discovery and package version extraction.

use crate::error::{PackagerError, Result};
use crate::workspace::WORKSPACE_MARKER;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the version file at the root of the release archive.
pub const VERSION_FILE: &str = "VERSION";

/// Version of the fetched release.
///
/// Keeps the trimmed text exactly as found so the package file name matches
/// the release. The text is only accepted if it parses as a semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersion {
    text: String,
}

impl PackageVersion {
    /// Parses trimmed version text.
    pub fn parse(raw: &str) -> std::result::Result<Self, semver::Error> {
        let text = raw.trim();
        semver::Version::parse(text)?;
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// The version text, unaltered apart from trimming.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Finds the single top-level directory of the extracted release.
///
/// Plain files next to it are ignored, with a warning for anything other than
/// the workspace marker.
///
/// # Errors
///
/// Returns [`PackagerError::UnexpectedArtifactLayout`] unless exactly one
/// directory exists under `project_dir`.
pub async fn locate_binary_root(project_dir: &Path) -> Result<PathBuf> {
    let mut entries = tokio::fs::read_dir(project_dir).await?;
    let mut directories = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            directories.push(entry.path());
        } else if entry.file_name() != WORKSPACE_MARKER {
            log::warn!("Ignoring top-level file {}", entry.path().display());
        }
    }

    match directories.as_slice() {
        [root] => {
            log::info!("Binary root: {}", root.display());
            Ok(root.clone())
        }
        _ => Err(PackagerError::UnexpectedArtifactLayout {
            path: project_dir.to_path_buf(),
            found: directories.len(),
        }),
    }
}

/// Reads the package version from `<binary_root>/VERSION`.
///
/// # Errors
///
/// Returns [`PackagerError::MalformedArtifact`] if the file is missing,
/// unreadable, or does not hold a semantic version.
pub async fn read_version(binary_root: &Path) -> Result<PackageVersion> {
    let path = binary_root.join(VERSION_FILE);

    let content =
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PackagerError::MalformedArtifact {
                path: path.clone(),
                reason: format!("cannot read version file: {}", e),
            })?;

    let version = PackageVersion::parse(&content).map_err(|e| PackagerError::MalformedArtifact {
        path: path.clone(),
        reason: format!("'{}' is not a semantic version: {}", content.trim(), e),
    })?;

    log::info!("Package version: {}", version);
    Ok(version)
}
