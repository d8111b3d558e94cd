//! Package format implementations.

pub mod nuget;

use std::fmt;

/// Kinds of package the bundler can produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PackageType {
    /// NuGet package (`.nupkg`).
    Nupkg,
}

impl PackageType {
    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Nupkg => "nupkg",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nupkg => f.write_str("NuGet package"),
        }
    }
}
