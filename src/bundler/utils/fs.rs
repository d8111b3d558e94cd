//! File system utilities for packaging.
//!
//! Provides directory reset helpers and source file checks with
//! path-carrying error messages.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => {
            log::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Checks that `path` exists and is a regular file.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] naming `path` if it is absent or not a file.
pub async fn require_file(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(Error::MissingFile {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::MissingFile {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e).fs_context("inspecting mapped file", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn erase_removes_previous_contents() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("out");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("nested/old.txt"), "stale").unwrap();

        create_dir_all(&dir, true).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn remove_missing_directory_is_ok() {
        let temp = tempfile::tempdir().unwrap();
        remove_dir_all(&temp.path().join("absent")).await.unwrap();
    }

    #[tokio::test]
    async fn require_file_rejects_directories_and_absent_paths() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("LICENSE");
        std::fs::write(&file, "license").unwrap();

        require_file(&file).await.unwrap();

        let err = require_file(temp.path()).await.unwrap_err();
        assert!(matches!(err, Error::MissingFile { ref path } if path == temp.path()));

        let absent = temp.path().join("x64/WinDivert.dll");
        let err = require_file(&absent).await.unwrap_err();
        assert!(matches!(err, Error::MissingFile { ref path } if *path == absent));
    }
}
