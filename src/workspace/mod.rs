//! Work and publish directory preparation.
//!
//! Both directories are wiped and recreated at the start of every run so no
//! file from a previous run can end up in a new package. A directory is only
//! wiped when it is empty or carries the [`WORKSPACE_MARKER`] left by an
//! earlier run.

use crate::bundler::{Settings, error::ErrorExt, utils::fs};
use crate::error::{PackagerError, Result};
use std::path::{Path, PathBuf};

/// File written into every directory the packager owns.
pub const WORKSPACE_MARKER: &str = ".native-windivert-packager";

/// Absolute directories used by one packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    project: PathBuf,
    publish: PathBuf,
}

impl WorkspacePaths {
    /// Creates workspace paths from explicit directories.
    pub fn new(project: impl Into<PathBuf>, publish: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            publish: publish.into(),
        }
    }

    /// Derives the paths from the settings' base directory.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.project_directory(), settings.publish_directory())
    }

    /// Directory the release archive is extracted into.
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Directory the package is written to.
    pub fn publish(&self) -> &Path {
        &self.publish
    }
}

/// Deletes and recreates both workspace directories.
///
/// Both directories are checked before either is touched.
///
/// # Errors
///
/// Returns [`PackagerError::UnmanagedDirectory`] if a directory exists, is not
/// empty and has no [`WORKSPACE_MARKER`]. Propagates filesystem failures
/// (permissions, invalid paths) with the offending path.
pub async fn prepare(paths: WorkspacePaths) -> Result<WorkspacePaths> {
    for dir in [&paths.project, &paths.publish] {
        ensure_owned(dir).await?;
    }

    for dir in [&paths.project, &paths.publish] {
        log::info!("Resetting {}", dir.display());
        fs::create_dir_all(dir, true).await?;
        let marker = dir.join(WORKSPACE_MARKER);
        tokio::fs::write(&marker, env!("CARGO_PKG_NAME"))
            .await
            .fs_context("writing workspace marker", &marker)?;
    }
    Ok(paths)
}

/// Fails unless `dir` is absent, empty, or marked as ours.
async fn ensure_owned(dir: &Path) -> Result<()> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if tokio::fs::try_exists(dir.join(WORKSPACE_MARKER)).await? {
        return Ok(());
    }
    if entries.next_entry().await?.is_none() {
        return Ok(());
    }

    Err(PackagerError::UnmanagedDirectory {
        path: dir.to_path_buf(),
    })
}
