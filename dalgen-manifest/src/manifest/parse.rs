//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "dalgen.toml")
    }
}

impl Manifest {
    /// Parse a dalgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a dalgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let project = ctx.push("project");
    project.validate_namespace(&manifest.project.namespace, "namespace")?;
    project.validate_extension(&manifest.project.extension)?;

    ctx.push("context")
        .validate_name(&manifest.context.name, "context name")?;

    let models = ctx.push("models");
    models.validate_folder(&manifest.models.folder)?;
    models.validate_namespace(&manifest.models.namespace, "namespace")?;

    let repositories = ctx.push("repositories");
    repositories.validate_folder(&manifest.repositories.folder)?;
    repositories.validate_namespace(&manifest.repositories.namespace, "namespace")?;

    if manifest.models.folder == manifest.repositories.folder {
        return Err(ctx.source_context().validation_error(
            "models and repositories must be written to different folders",
            ctx.find_span(&manifest.repositories.folder),
        ));
    }

    Ok(())
}
