//! Core Settings struct and implementations.

use super::PackageSettings;
use std::path::{Path, PathBuf};
use url::Url;

/// Name of the directory receiving finished packages.
pub const PUBLISH_DIRECTORY: &str = "Publish";

/// Main settings for packaging operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Holds the package metadata, the release download URL and the base
/// directory every other path is derived from.
///
/// # Examples
///
/// ```no_run
/// use native_windivert_packager::bundler::SettingsBuilder;
///
/// # fn example() -> native_windivert_packager::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .base_directory("/srv/windivert")
///     .build()?;
/// assert!(settings.publish_directory().ends_with("Publish"));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`PackageSettings`] - Package metadata
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Release archive to download.
    source_url: Url,

    /// Absolute directory the tool lives in.
    base_directory: PathBuf,
}

impl Settings {
    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the package id.
    pub fn package_id(&self) -> &str {
        &self.package.id
    }

    /// Returns the release archive URL.
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    /// Returns the base directory.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Directory the release archive is extracted into (`<base>/<id>`).
    pub fn project_directory(&self) -> PathBuf {
        self.base_directory.join(&self.package.id)
    }

    /// Directory the package is written to (`<base>/Publish`).
    pub fn publish_directory(&self) -> PathBuf {
        self.base_directory.join(PUBLISH_DIRECTORY)
    }

    /// Readme shipped with the tool.
    pub fn readme_path(&self) -> PathBuf {
        self.base_directory.join(&self.package.readme_file)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(package: PackageSettings, source_url: Url, base_directory: PathBuf) -> Self {
        Self {
            package,
            source_url,
            base_directory,
        }
    }
}
