//! `.nupkg` container writing.
//!
//! A package is a zip holding the manifest, the mapped files and the OPC
//! bookkeeping parts (`_rels/.rels`, core properties, content types).

use super::manifest::{FileMapping, ManifestRenderer, PackageDescriptor};
use crate::bundler::error::{Context, Error, ErrorExt, Result};
use std::io::{Seek, Write};
use std::path::Path;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Directory of the core properties part.
const CORE_PROPERTIES_DIR: &str = "package/services/metadata/core-properties";

/// Parts rendered in memory before the zip is written.
struct RenderedParts {
    nuspec_part: String,
    nuspec: String,
    relationships: String,
    core_properties_part: String,
    core_properties: String,
    content_types: String,
}

fn render_parts(descriptor: &PackageDescriptor, mappings: &[FileMapping]) -> Result<RenderedParts> {
    let renderer = ManifestRenderer::new()?;

    let nuspec_part = descriptor.nuspec_part();
    let core_properties_part = format!(
        "{}/{}.psmdcp",
        CORE_PROPERTIES_DIR,
        uuid::Uuid::new_v4().simple()
    );

    let mut part_names = vec!["_rels/.rels", nuspec_part.as_str(), core_properties_part.as_str()];
    part_names.extend(mappings.iter().map(FileMapping::target));

    Ok(RenderedParts {
        nuspec: renderer.nuspec(descriptor)?,
        relationships: renderer.relationships(&nuspec_part, &core_properties_part)?,
        core_properties: renderer.core_properties(descriptor)?,
        content_types: renderer.content_types(part_names)?,
        nuspec_part,
        core_properties_part,
    })
}

fn add_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    name: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(name, options)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

/// Writes the package to `output`.
///
/// The zip is written to a temporary file next to `output` and only renamed
/// into place once complete, so a failed run leaves no package behind.
pub async fn write_package(
    output: &Path,
    descriptor: &PackageDescriptor,
    mappings: &[FileMapping],
) -> Result<()> {
    let parts = render_parts(descriptor, mappings)?;
    let output = output.to_path_buf();
    let mappings = mappings.to_vec();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let dir = output.parent().context("package path has no parent directory")?;
        let staging =
            tempfile::NamedTempFile::new_in(dir).fs_context("creating staging file", dir)?;

        let mut zip = ZipWriter::new(staging.as_file());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        add_part(&mut zip, options, "_rels/.rels", &parts.relationships)?;
        add_part(&mut zip, options, &parts.nuspec_part, &parts.nuspec)?;

        for mapping in &mappings {
            log::debug!("Adding {} as {}", mapping.source().display(), mapping.target());
            let mut source = std::fs::File::open(mapping.source())
                .fs_context("opening mapped file", mapping.source())?;
            zip.start_file(mapping.target(), options)?;
            std::io::copy(&mut source, &mut zip)
                .fs_context("packing mapped file", mapping.source())?;
        }

        add_part(&mut zip, options, &parts.core_properties_part, &parts.core_properties)?;
        add_part(&mut zip, options, "[Content_Types].xml", &parts.content_types)?;

        zip.finish()?;

        staging
            .persist(&output)
            .map_err(|e| e.error)
            .fs_context("moving package into place", &output)?;
        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("package writing task panicked: {}", e)))?
}
