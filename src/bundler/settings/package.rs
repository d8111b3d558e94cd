//! Package metadata and configuration.

use super::PUBLISH_DIRECTORY;
use regex::Regex;

/// NuGet package id of the produced package.
pub const DEFAULT_PACKAGE_ID: &str = "Native.WinDivert";

/// Longest package id NuGet accepts.
pub const MAX_PACKAGE_ID_LENGTH: usize = 100;

/// NuGet id grammar: word runs joined by single dots or dashes.
const PACKAGE_ID_PATTERN: &str = r"^[A-Za-z0-9_]+(?:[.-][A-Za-z0-9_]+)*$";

/// Package description written to the manifest.
pub const DEFAULT_DESCRIPTION: &str = "WinDivert binary files.";

/// Package metadata and configuration.
///
/// Contains the fixed package information written into the manifest and the
/// curated list of files taken from the fetched release. The [`Default`]
/// implementation describes the x64 WinDivert package.
///
/// # Examples
///
/// ```no_run
/// use native_windivert_packager::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     id: "Native.WinDivert.Preview".into(),
///     ..Default::default()
/// };
/// assert_eq!(settings.runtime_identifier, "win-x64");
/// ```
#[derive(Debug, Clone)]
pub struct PackageSettings {
    /// Package id, also the name of the work directory and the output prefix.
    pub id: String,

    /// Brief description of the package.
    pub description: String,

    /// Search tags.
    pub tags: Vec<String>,

    /// Readme file name, read from the base directory and packed at the root.
    pub readme_file: String,

    /// License file name inside the binary root, packed at the root.
    pub license_file: String,

    /// Whether consumers must accept the license on install.
    pub require_license_acceptance: bool,

    /// Runtime identifier of the native asset folder (`runtimes/<rid>/native`).
    pub runtime_identifier: String,

    /// Directory inside the binary root holding the platform binaries.
    pub binary_directory: String,

    /// Native binaries copied from `binary_directory`.
    pub binaries: Vec<String>,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            id: DEFAULT_PACKAGE_ID.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            tags: vec!["WinDivert".to_string()],
            readme_file: "ReadMe.md".to_string(),
            license_file: "LICENSE".to_string(),
            require_license_acceptance: true,
            runtime_identifier: "win-x64".to_string(),
            binary_directory: "x64".to_string(),
            binaries: vec!["WinDivert.dll".to_string(), "WinDivert64.sys".to_string()],
        }
    }
}

/// Checks that `id` is a NuGet package id usable as a work directory name.
///
/// The id must follow NuGet's grammar, fit in [`MAX_PACKAGE_ID_LENGTH`]
/// characters and must not name the publish directory in any letter case.
///
/// # Errors
///
/// Returns [`Error::GenericError`](crate::bundler::Error::GenericError)
/// describing the first rule the id breaks.
pub fn validate_package_id(id: &str) -> crate::bundler::Result<()> {
    if id.is_empty() {
        crate::bail!("package id must not be empty");
    }
    if id.len() > MAX_PACKAGE_ID_LENGTH {
        crate::bail!(
            "package id is longer than {} characters: {}",
            MAX_PACKAGE_ID_LENGTH,
            id
        );
    }

    let grammar = Regex::new(PACKAGE_ID_PATTERN)
        .map_err(|e| crate::bundler::Error::GenericError(format!("invalid id pattern: {e}")))?;
    if !grammar.is_match(id) {
        crate::bail!(
            "package id must be letters, digits and '_' joined by single '.' or '-': {}",
            id
        );
    }

    if id.eq_ignore_ascii_case(PUBLISH_DIRECTORY) {
        crate::bail!("package id cannot be {} (reserved for output)", PUBLISH_DIRECTORY);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nuget_ids_are_accepted() {
        for id in ["Native.WinDivert", "Native_WinDivert-x64", "a", "Pkg.2"] {
            assert!(validate_package_id(id).is_ok(), "{id:?} should be accepted");
        }
    }

    #[test]
    fn ids_outside_nuget_grammar_are_rejected() {
        for id in [
            "",
            ".",
            "..",
            "../escape",
            "a/b",
            "a\\b",
            "a..b",
            ".hidden",
            "trailing-",
            "with space",
        ] {
            assert!(validate_package_id(id).is_err(), "{id:?} should be rejected");
        }
    }

    #[test]
    fn publish_directory_is_reserved_in_any_case() {
        for id in ["Publish", "publish", "PUBLISH"] {
            let err = validate_package_id(id).unwrap_err();
            assert!(err.to_string().contains("reserved"), "{id:?}: {err}");
        }
    }

    #[test]
    fn overlong_id_is_rejected() {
        let id = "a".repeat(MAX_PACKAGE_ID_LENGTH + 1);
        assert!(validate_package_id(&id).is_err());
        assert!(validate_package_id(&id[1..]).is_ok());
    }
}
