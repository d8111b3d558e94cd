//! Artifact checksum calculation.
//!
//! This module provides SHA256 checksum calculation for produced packages.

use crate::bundler::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of a single file.
///
/// Reads the file in 8KB chunks to handle large files efficiently.
///
/// # Arguments
///
/// * `file_path` - Path to file to hash
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If file cannot be read
pub async fn calculate_sha256(file_path: &std::path::Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashes_file_contents() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("hello.txt");
        std::fs::write(&path, "hello").unwrap();

        assert_eq!(
            calculate_sha256(&path).await.unwrap(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("absent.nupkg");
        let err = calculate_sha256(&path).await.unwrap_err();
        assert!(err.to_string().contains("absent.nupkg"));
    }
}
