//! Comprehensive error types for packaging operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Version-control tool missing or failing on a required query
    #[error("External tool failed: {command} - {reason}")]
    ExternalTool {
        /// Command line that was run
        command: String,
        /// Reason for the error
        reason: String,
    },

    /// Download failed or returned a non-success status
    #[error("Fetch failed for {url}: {reason}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Reason for the error
        reason: String,
    },

    /// Extracted artifact does not have exactly one top-level directory
    #[error("Unexpected artifact layout in {}: expected exactly one top-level directory, found {found}", path.display())]
    UnexpectedArtifactLayout {
        /// Directory the artifact was extracted into
        path: PathBuf,
        /// Number of top-level directories found
        found: usize,
    },

    /// Version file missing, unreadable or not a semantic version
    #[error("Malformed artifact at {}: {reason}", path.display())]
    MalformedArtifact {
        /// Offending file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Workspace directory holds content this tool did not create
    #[error("Refusing to erase {}: not empty and not created by the packager", path.display())]
    UnmanagedDirectory {
        /// Directory that would have been erased
        path: PathBuf,
    },

    /// Package assembly errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::ExternalTool { .. } => vec![
                "Make sure git is installed and on PATH (or pass --git)".to_string(),
                "Set an author name with `git config user.name \"Your Name\"`".to_string(),
            ],
            Self::Fetch { .. } => vec![
                "Check network connectivity and that the release URL still exists".to_string(),
                "Override the download location with --url if the release moved".to_string(),
            ],
            Self::UnexpectedArtifactLayout { .. } | Self::MalformedArtifact { .. } => vec![
                "The release archive layout changed; inspect the extracted directory".to_string(),
            ],
            Self::UnmanagedDirectory { path } => vec![
                format!(
                    "Move the contents of {} elsewhere or choose another --base-dir or --package-id",
                    path.display()
                ),
            ],
            Self::Bundler(crate::bundler::Error::MissingFile { path }) => vec![format!(
                "Provide the missing file or check the archive contents: {}",
                path.display()
            )],
            Self::Io(_) | Self::Bundler(_) => vec![
                "Check permissions on the base directory and free disk space".to_string(),
            ],
            Self::Cli(_) => vec!["Run with --help to see the accepted arguments".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_error_reports_count_and_path() {
        let err = PackagerError::UnexpectedArtifactLayout {
            path: PathBuf::from("/work/Native.WinDivert"),
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("found 2"));
        assert!(msg.contains("/work/Native.WinDivert"));
    }

    #[test]
    fn missing_file_suggestion_names_path() {
        let err = PackagerError::Bundler(crate::bundler::Error::MissingFile {
            path: PathBuf::from("/work/root/LICENSE"),
        });
        let suggestions = err.recovery_suggestions();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("/work/root/LICENSE"));
    }

    #[test]
    fn every_kind_has_a_suggestion() {
        let errors = [
            PackagerError::ExternalTool {
                command: "git config user.name".into(),
                reason: "exit status 1".into(),
            },
            PackagerError::Fetch {
                url: "https://example.test/a.zip".into(),
                reason: "404".into(),
            },
            PackagerError::MalformedArtifact {
                path: PathBuf::from("VERSION"),
                reason: "empty".into(),
            },
            PackagerError::Io(std::io::Error::other("boom")),
            PackagerError::UnmanagedDirectory {
                path: PathBuf::from("/work/src"),
            },
        ];
        for err in errors {
            assert!(!err.recovery_suggestions().is_empty(), "{err}");
        }
    }
}
