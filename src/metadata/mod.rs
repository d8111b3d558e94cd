//! Package metadata derived from version control and the fetched release.
//!
//! - [`identity`] resolves the author and repository URL
//! - [`git`] runs those queries through the `git` executable
//! - [`version`] finds the binary root and reads its `VERSION` file

pub mod git;
pub mod identity;
pub mod version;

pub use git::GitCli;
pub use identity::{RepositoryIdentity, VersionControl, resolve};
pub use version::{PackageVersion, locate_binary_root, read_version};
