//! Package descriptor, file mapping and manifest rendering.

use super::template::{
    CONTENT_TYPES_TEMPLATE, CORE_PROPERTIES_TEMPLATE, NUSPEC_TEMPLATE, RELS_TEMPLATE,
};
use crate::bundler::{
    error::{Error, Result},
    settings::{PackageSettings, Settings},
};
use crate::metadata::{PackageVersion, RepositoryIdentity};
use handlebars::Handlebars;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Content type of parts without a more specific one.
const OCTET_CONTENT_TYPE: &str = "application/octet";

/// Package metadata written to the manifest.
///
/// Built once per run from the package settings, the repository identity and
/// the fetched version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    id: String,
    version: PackageVersion,
    authors: Vec<String>,
    description: String,
    readme: String,
    license_file: String,
    require_license_acceptance: bool,
    repository_url: Option<String>,
    tags: Vec<String>,
}

impl PackageDescriptor {
    /// Builds the descriptor.
    ///
    /// The repository reference is left out entirely when the identity has no
    /// repository URL.
    pub fn new(
        package: &PackageSettings,
        identity: &RepositoryIdentity,
        version: &PackageVersion,
    ) -> Self {
        Self {
            id: package.id.clone(),
            version: version.clone(),
            authors: vec![identity.user_name().to_string()],
            description: package.description.clone(),
            readme: package.readme_file.clone(),
            license_file: package.license_file.clone(),
            require_license_acceptance: package.require_license_acceptance,
            repository_url: identity.repository_url().map(String::from),
            tags: package.tags.clone(),
        }
    }

    /// Package id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Release version, as read from the archive.
    pub fn version(&self) -> &PackageVersion {
        &self.version
    }

    /// Package authors; the version-control user name.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Manifest description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// License file name at the package root.
    pub fn license_file(&self) -> &str {
        &self.license_file
    }

    /// Source repository URL, if a remote is configured.
    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    /// Search tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Name of the manifest part inside the package.
    pub fn nuspec_part(&self) -> String {
        format!("{}.nuspec", self.id)
    }
}

/// A file on disk and where it goes inside the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMapping {
    source: PathBuf,
    target: String,
}

impl FileMapping {
    /// Maps `source` on disk to the package path `target`.
    pub fn new(source: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Absolute source path.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Forward-slash path inside the package.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Builds the fixed file mapping: readme, license, then the native binaries
/// under `runtimes/<rid>/native`.
pub fn file_mappings(settings: &Settings, binary_root: &Path) -> Vec<FileMapping> {
    let package = settings.package();
    let native_dir = format!("runtimes/{}/native", package.runtime_identifier);

    let mut mappings = vec![
        FileMapping::new(settings.readme_path(), package.readme_file.as_str()),
        FileMapping::new(
            binary_root.join(&package.license_file),
            package.license_file.as_str(),
        ),
    ];

    mappings.extend(package.binaries.iter().map(|binary| {
        FileMapping::new(
            binary_root.join(&package.binary_directory).join(binary),
            format!("{}/{}", native_dir, binary),
        )
    }));

    mappings
}

#[derive(Serialize)]
struct NuspecContext<'a> {
    id: &'a str,
    version: &'a str,
    authors: String,
    require_license_acceptance: bool,
    license_file: &'a str,
    readme: &'a str,
    description: &'a str,
    tags: String,
    repository_url: Option<&'a str>,
    tool: &'static str,
}

impl<'a> NuspecContext<'a> {
    fn new(descriptor: &'a PackageDescriptor) -> Self {
        Self {
            id: &descriptor.id,
            version: descriptor.version.as_str(),
            authors: descriptor.authors.join(","),
            require_license_acceptance: descriptor.require_license_acceptance,
            license_file: &descriptor.license_file,
            readme: &descriptor.readme,
            description: &descriptor.description,
            tags: descriptor.tags.join(" "),
            repository_url: descriptor.repository_url.as_deref(),
            tool: env!("CARGO_PKG_NAME"),
        }
    }
}

#[derive(Serialize)]
struct RelsContext<'a> {
    nuspec_part: &'a str,
    core_properties_part: &'a str,
    manifest_rel_id: String,
    core_properties_rel_id: String,
}

#[derive(Serialize)]
struct DefaultContentType {
    extension: String,
    content_type: &'static str,
}

#[derive(Serialize)]
struct ContentTypesContext {
    defaults: Vec<DefaultContentType>,
    overrides: Vec<String>,
}

/// Renders the XML parts of a package.
pub struct ManifestRenderer {
    handlebars: Handlebars<'static>,
}

impl ManifestRenderer {
    /// Registers all templates.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(escape_xml);

        for (name, template) in [
            ("nuspec", NUSPEC_TEMPLATE),
            ("rels", RELS_TEMPLATE),
            ("psmdcp", CORE_PROPERTIES_TEMPLATE),
            ("content_types", CONTENT_TYPES_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| Error::Template(format!("failed to register {name} template: {e}")))?;
        }

        Ok(Self { handlebars })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(|e| Error::Template(format!("failed to render {name}: {e}")))
    }

    /// Renders `<id>.nuspec`.
    pub fn nuspec(&self, descriptor: &PackageDescriptor) -> Result<String> {
        self.render("nuspec", &NuspecContext::new(descriptor))
    }

    /// Renders the core properties part.
    pub fn core_properties(&self, descriptor: &PackageDescriptor) -> Result<String> {
        self.render("psmdcp", &NuspecContext::new(descriptor))
    }

    /// Renders `_rels/.rels` pointing at the manifest and core properties.
    pub fn relationships(&self, nuspec_part: &str, core_properties_part: &str) -> Result<String> {
        self.render(
            "rels",
            &RelsContext {
                nuspec_part,
                core_properties_part,
                manifest_rel_id: relationship_id(),
                core_properties_rel_id: relationship_id(),
            },
        )
    }

    /// Renders `[Content_Types].xml` covering every part name given.
    pub fn content_types<'a>(&self, parts: impl IntoIterator<Item = &'a str>) -> Result<String> {
        let mut extensions = BTreeSet::new();
        let mut overrides = BTreeSet::new();

        for part in parts {
            let file_name = part.rsplit('/').next().unwrap_or(part);
            match file_name.rsplit_once('.') {
                Some((_, ext)) if !ext.is_empty() => {
                    extensions.insert(ext.to_ascii_lowercase());
                }
                _ => {
                    overrides.insert(part.to_string());
                }
            }
        }

        let defaults = extensions
            .into_iter()
            .map(|extension| DefaultContentType {
                content_type: content_type_for(&extension),
                extension,
            })
            .collect();

        self.render(
            "content_types",
            &ContentTypesContext {
                defaults,
                overrides: overrides.into_iter().collect(),
            },
        )
    }
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "rels" => "application/vnd.openxmlformats-package.relationships+xml",
        "psmdcp" => "application/vnd.openxmlformats-package.core-properties+xml",
        _ => OCTET_CONTENT_TYPE,
    }
}

/// Relationship ids are "R" plus 16 hex digits.
fn relationship_id() -> String {
    let simple = uuid::Uuid::new_v4().simple().to_string().to_ascii_uppercase();
    format!("R{}", &simple[..16])
}

/// Escapes markup characters and drops characters XML 1.0 cannot hold.
fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c < '\u{20}' => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
