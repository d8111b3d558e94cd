//! Builder for constructing Settings.

use super::{PackageSettings, Settings, validate_package_id};
use crate::bundler::error::{Context, ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use url::Url;

/// Release archive fetched when no URL is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://reqrypt.org/download/WinDivert-2.2.2-A.zip";

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building packaging settings. Every field has a
/// default, so `SettingsBuilder::new().build()` reproduces the stock
/// Native.WinDivert package rooted at this crate's directory.
///
/// # Examples
///
/// ```no_run
/// use native_windivert_packager::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> native_windivert_packager::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .base_directory("target/packaging")
///     .source_url("http://127.0.0.1:8080/WinDivert.zip".parse().unwrap())
///     .package_settings(PackageSettings::default())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    base_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    source_url: Option<Url>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the base directory.
    ///
    /// Relative paths are resolved against the current directory.
    ///
    /// Default: the directory containing this crate's manifest
    pub fn base_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// Default: [`PackageSettings::default`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the release archive URL.
    ///
    /// Default: [`DEFAULT_SOURCE_URL`]
    pub fn source_url(mut self, url: Url) -> Self {
        self.source_url = Some(url);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be made absolute or the
    /// package id is not a valid NuGet id.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let base = self
            .base_directory
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        let base_directory = base
            .absolutize()
            .fs_context("resolving base directory", &base)?
            .into_owned();

        let package = self.package_settings.unwrap_or_default();
        validate_package_id(&package.id)?;

        let source_url = match self.source_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_SOURCE_URL).context("parsing default source URL")?,
        };

        log::debug!("Base directory: {}", base_directory.display());
        log::debug!("Source URL: {}", source_url);

        Ok(Settings::new(package, source_url, base_directory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_windivert_package() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.package_id(), "Native.WinDivert");
        assert_eq!(settings.source_url().as_str(), DEFAULT_SOURCE_URL);
        assert!(settings.base_directory().is_absolute());
        assert_eq!(
            settings.readme_path(),
            Path::new(env!("CARGO_MANIFEST_DIR")).join("ReadMe.md")
        );
    }

    #[test]
    fn derived_directories_follow_base_and_id() {
        let temp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .base_directory(temp.path())
            .package_settings(PackageSettings {
                id: "Native.Sample".into(),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(settings.project_directory(), temp.path().join("Native.Sample"));
        assert_eq!(settings.publish_directory(), temp.path().join("Publish"));
    }

    #[test]
    fn relative_base_is_made_absolute() {
        let settings = SettingsBuilder::new()
            .base_directory("relative/base")
            .build()
            .unwrap();
        assert!(settings.base_directory().is_absolute());
        assert!(settings.base_directory().ends_with("relative/base"));
    }

    #[test]
    fn blank_package_id_is_rejected() {
        let result = SettingsBuilder::new()
            .package_settings(PackageSettings {
                id: "  ".into(),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn case_variant_of_publish_is_rejected_as_id() {
        let temp = tempfile::tempdir().unwrap();
        let result = SettingsBuilder::new()
            .base_directory(temp.path())
            .package_settings(PackageSettings {
                id: "publish".into(),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
