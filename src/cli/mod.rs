//! Command line interface for the packager.
//!
//! Parses arguments, builds [`Settings`](crate::bundler::Settings) and runs
//! the [`Bundler`] against the real `git` and HTTP backends.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{Bundler, PackageSettings, SettingsBuilder};
use crate::error::{CliError, Result};
use crate::metadata::GitCli;
use crate::source::HttpArtifactSource;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs one packaging pass for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let runtime_config = RuntimeConfig::from(args);

    let mut builder = SettingsBuilder::new()
        .source_url(args.url.clone())
        .package_settings(PackageSettings {
            id: args.package_id.trim().to_string(),
            ..Default::default()
        });
    if let Some(base_dir) = &args.base_dir {
        builder = builder.base_directory(base_dir);
    }
    let settings = builder.build()?;

    let git = GitCli::new(&args.git, settings.base_directory());
    let bundler = Bundler::new(settings);

    let artifact = bundler.package(&git, &HttpArtifactSource::new()).await?;

    runtime_config.verbose_println(&format!(
        "Created {}: {}",
        artifact.package_type,
        artifact.path.display()
    ))?;
    runtime_config.verbose_println(&format!("  Size: {} bytes", artifact.size))?;
    runtime_config.verbose_println(&format!("  SHA256: {}", artifact.checksum))?;
    runtime_config.success("Done.")?;

    Ok(0)
}
