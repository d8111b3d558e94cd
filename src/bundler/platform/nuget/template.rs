//! Handlebars templates for the XML parts of a `.nupkg`.

/// Package manifest (`<id>.nuspec`).
pub const NUSPEC_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>{{id}}</id>
    <version>{{version}}</version>
    <authors>{{authors}}</authors>
    <requireLicenseAcceptance>{{require_license_acceptance}}</requireLicenseAcceptance>
    <license type="file">{{license_file}}</license>
    <licenseUrl>https://aka.ms/deprecateLicenseUrl</licenseUrl>
    <readme>{{readme}}</readme>
    <description>{{description}}</description>
    <tags>{{tags}}</tags>
{{#if repository_url}}
    <repository url="{{repository_url}}" />
{{/if}}
  </metadata>
</package>
"#;

/// Package relationships (`_rels/.rels`).
pub const RELS_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Type="http://schemas.microsoft.com/packaging/2010/07/manifest" Target="/{{nuspec_part}}" Id="{{manifest_rel_id}}" />
  <Relationship Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="/{{core_properties_part}}" Id="{{core_properties_rel_id}}" />
</Relationships>
"#;

/// Core properties (`package/services/metadata/core-properties/<guid>.psmdcp`).
pub const CORE_PROPERTIES_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<coreProperties xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://schemas.openxmlformats.org/package/2006/metadata/core-properties">
  <dc:creator>{{authors}}</dc:creator>
  <dc:description>{{description}}</dc:description>
  <dc:identifier>{{id}}</dc:identifier>
  <version>{{version}}</version>
  <keywords>{{tags}}</keywords>
  <lastModifiedBy>{{tool}}</lastModifiedBy>
</coreProperties>
"#;

/// Content types (`[Content_Types].xml`).
pub const CONTENT_TYPES_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
{{#each defaults}}
  <Default Extension="{{extension}}" ContentType="{{content_type}}" />
{{/each}}
{{#each overrides}}
  <Override PartName="/{{this}}" ContentType="application/octet" />
{{/each}}
</Types>
"#;
