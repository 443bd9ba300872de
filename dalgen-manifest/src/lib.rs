//! Parsing and validation of `dalgen.toml` project manifests.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CatalogConfig, ContextConfig, DalgenToml, Manifest, ModelsConfig, OutputConfig, ParseContext,
    ProjectConfig, RepositoriesConfig, TemplatesConfig, parse_manifest,
};
