//! Package assembly.
//!
//! Turns an extracted WinDivert release into a NuGet package:
//!
//! - [`settings`] - package constants, download URL and directory layout
//! - [`builder`] - the [`Bundler`] orchestrator and checksums
//! - [`platform`] - the `.nupkg` format
//! - [`utils`] - filesystem helpers

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use platform::PackageType;
pub use settings::{PackageSettings, Settings, SettingsBuilder};

use std::path::PathBuf;

/// A package produced by the bundler.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Format of the package.
    pub package_type: PackageType,
    /// Location of the package.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the package.
    pub checksum: String,
}
