//! Command line argument parsing and validation.
//!
//! Every argument is optional: running without any reproduces the stock
//! Native.WinDivert package next to this crate.

use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::bundler::settings::{DEFAULT_PACKAGE_ID, DEFAULT_SOURCE_URL, validate_package_id};

/// Repackages the WinDivert release as a NuGet package
#[derive(Parser, Debug)]
#[command(
    name = "native-windivert-packager",
    version,
    about = "Repackages the WinDivert release as a NuGet package",
    long_about = "Downloads the WinDivert release archive, extracts it, and writes
<base>/Publish/<id>.<version>.nupkg containing the x64 native binaries.

The author is taken from `git config user.name` and the repository URL from the
first configured git remote.

Usage:
  native-windivert-packager
  native-windivert-packager --base-dir /tmp/windivert --verbose"
)]
pub struct Args {
    /// Release archive to download
    #[arg(long, value_name = "URL", env = "WINDIVERT_URL", default_value = DEFAULT_SOURCE_URL)]
    pub url: Url,

    /// Directory holding ReadMe.md; work and publish directories are created inside it
    ///
    /// Defaults to the directory of this tool's Cargo.toml.
    #[arg(long, value_name = "PATH", env = "PACKAGER_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// NuGet package id
    #[arg(long, value_name = "ID", env = "PACKAGER_PACKAGE_ID", default_value = DEFAULT_PACKAGE_ID)]
    pub package_id: String,

    /// git executable used for identity lookups
    #[arg(long, value_name = "PATH", env = "PACKAGER_GIT", default_value = "git")]
    pub git: PathBuf,

    /// Print package path, size and checksum
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the completion message
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    ///
    /// The package id names a directory that is wiped on every run, so it must
    /// be a plain NuGet id.
    pub fn validate(&self) -> Result<(), String> {
        validate_package_id(self.package_id.trim()).map_err(|e| e.to_string())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }
}
