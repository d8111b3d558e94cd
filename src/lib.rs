//! NuGet packager for the WinDivert native driver
//!
//! This library provides the steps behind the `native-windivert-packager` tool:
//! - identity and version metadata ([`metadata`])
//! - work directory preparation ([`workspace`])
//! - release download and extraction ([`source`])
//! - `.nupkg` assembly ([`bundler`])
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod source;
pub mod workspace;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
