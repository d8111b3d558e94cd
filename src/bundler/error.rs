//! Error types for package assembly.
//!
//! Provides the [`Error`] enum used across the bundler, plus small extension
//! traits that attach filesystem context and human-readable messages.

use std::path::{Path, PathBuf};

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a package.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file referenced by the file mapping does not exist.
    #[error("mapped source file does not exist: {}", path.display())]
    MissingFile {
        /// Absolute path of the missing source.
        path: PathBuf,
    },

    /// Filesystem operation failed on a known path.
    #[error("{context} ({}): {error}", path.display())]
    Fs {
        /// What the bundler was doing.
        context: String,
        /// Path involved in the operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Raw I/O error.
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Package container could not be written.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Manifest template failed to register or render.
    #[error("template error: {0}")]
    Template(String),

    /// Anything else, with a message.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error with the action being performed and the path involved.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Converts options and foreign errors into [`Error::GenericError`] with a message.
pub trait Context<T> {
    /// Adds a message describing what failed.
    fn context(self, message: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, message: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(message.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, message: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{message}: {e}")))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
