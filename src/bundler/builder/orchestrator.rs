//! Main packaging orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the packaging
//! steps in order: identity, workspace, fetch, version, assembly.

use crate::{
    bundler::{BundledArtifact, PackageType, Result, Settings, error::ErrorExt, platform::nuget},
    metadata::{self, PackageVersion, RepositoryIdentity, VersionControl},
    source::ArtifactSource,
    workspace::{self, WorkspacePaths},
};
use std::path::Path;

use super::checksum::calculate_sha256;

/// Main packaging orchestrator.
///
/// Each step is awaited to completion before the next starts and the first
/// failure aborts the run. Nothing produced before a failure is cleaned up.
///
/// # Examples
///
/// ```no_run
/// use native_windivert_packager::bundler::{Bundler, SettingsBuilder};
/// use native_windivert_packager::metadata::GitCli;
/// use native_windivert_packager::source::HttpArtifactSource;
///
/// # async fn example() -> native_windivert_packager::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let git = GitCli::new("git", settings.base_directory());
/// let bundler = Bundler::new(settings);
///
/// let artifact = bundler.package(&git, &HttpArtifactSource::new()).await?;
/// println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs the whole packaging sequence.
    ///
    /// 1. Resolve the repository identity through `vcs`
    /// 2. Reset the work and publish directories
    /// 3. Fetch and extract the release from `source`
    /// 4. Locate the binary root and read its version
    /// 5. Assemble the package into the publish directory
    pub async fn package<V, S>(&self, vcs: &V, source: &S) -> crate::Result<BundledArtifact>
    where
        V: VersionControl,
        S: ArtifactSource,
    {
        let identity = metadata::resolve(vcs).await?;

        let paths = workspace::prepare(WorkspacePaths::from_settings(&self.settings)).await?;

        source
            .fetch(self.settings.source_url(), paths.project())
            .await?;

        let binary_root = metadata::locate_binary_root(paths.project()).await?;
        let version = metadata::read_version(&binary_root).await?;

        let artifact = self
            .assemble(&identity, &version, &binary_root, paths.publish())
            .await?;
        Ok(artifact)
    }

    /// Assembles the package from an already extracted release.
    ///
    /// # Returns
    ///
    /// The written package with its size and SHA-256 checksum.
    pub async fn assemble(
        &self,
        identity: &RepositoryIdentity,
        version: &PackageVersion,
        binary_root: &Path,
        publish_dir: &Path,
    ) -> Result<BundledArtifact> {
        let path =
            nuget::bundle_project(&self.settings, identity, version, binary_root, publish_dir)
                .await?;

        let size = tokio::fs::metadata(&path)
            .await
            .fs_context("reading artifact metadata", &path)?
            .len();
        let checksum = calculate_sha256(&path).await?;

        log::debug!("{} is {} bytes, sha256 {}", path.display(), size, checksum);

        Ok(BundledArtifact {
            package_type: PackageType::Nupkg,
            path,
            size,
            checksum,
        })
    }
}
