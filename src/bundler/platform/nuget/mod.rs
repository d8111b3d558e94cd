//! NuGet package creation.
//!
//! Packs the native binaries of the fetched release, its license and the
//! tool's readme into a `.nupkg` with a generated `.nuspec` manifest.
//!
//! # Module Organization
//!
//! - `template` - Handlebars templates for the XML parts
//! - `manifest` - Package descriptor, file mapping and rendering
//! - `archive` - Zip container writing

mod archive;
mod manifest;
mod template;

pub use archive::write_package;
pub use manifest::{FileMapping, ManifestRenderer, PackageDescriptor, file_mappings};

use super::PackageType;
use crate::bundler::{error::Result, settings::Settings, utils::fs};
use crate::metadata::{PackageVersion, RepositoryIdentity};
use std::path::{Path, PathBuf};

/// File name of a package: `<id>.<version>.nupkg`, version unaltered.
pub fn package_file_name(id: &str, version: &PackageVersion) -> String {
    format!("{}.{}.{}", id, version, PackageType::Nupkg.extension())
}

/// Bundle the fetched release as a NuGet package.
///
/// # Process
///
/// 1. Build the package descriptor from settings, identity and version
/// 2. Build the file mapping and check every source exists
/// 3. Render the manifest parts and write the package into `publish_dir`
///
/// # Returns
///
/// Path of the written package.
///
/// # Errors
///
/// Returns [`Error::MissingFile`](crate::bundler::Error::MissingFile) for the
/// first mapped source that does not exist; nothing is written in that case.
pub async fn bundle_project(
    settings: &Settings,
    identity: &RepositoryIdentity,
    version: &PackageVersion,
    binary_root: &Path,
    publish_dir: &Path,
) -> Result<PathBuf> {
    log::info!("Building NuGet package for {}", settings.package_id());

    let descriptor = PackageDescriptor::new(settings.package(), identity, version);
    let mappings = file_mappings(settings, binary_root);

    for mapping in &mappings {
        fs::require_file(mapping.source()).await?;
    }

    let output = publish_dir.join(package_file_name(descriptor.id(), version));
    write_package(&output, &descriptor, &mappings).await?;

    log::info!("✓ Created NuGet package: {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_keeps_version_text() {
        let version = PackageVersion::parse("2.2.2-A.1").unwrap();
        assert_eq!(
            package_file_name("Native.WinDivert", &version),
            "Native.WinDivert.2.2.2-A.1.nupkg"
        );
    }
}
