//! Configuration structures for packaging operations.
//!
//! This module provides the package metadata, the download location and the
//! base directory layout, plus a builder for constructing settings.

mod builder;
mod core;
mod package;

// Re-export all public types
pub use builder::{DEFAULT_SOURCE_URL, SettingsBuilder};
pub use core::{PUBLISH_DIRECTORY, Settings};
pub use package::{
    DEFAULT_DESCRIPTION, DEFAULT_PACKAGE_ID, MAX_PACKAGE_ID_LENGTH, PackageSettings,
    validate_package_id,
};
