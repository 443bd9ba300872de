//! Core operations.
//!
//! This module contains the business logic for dalgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod init;
pub mod tables;

pub use check::check;
use dalgen_codegen::{BuiltinTemplates, CatalogSnapshot, Config, DirTemplateSource, TemplateSource};
use eyre::{Context, Result};
pub use generate::{GenerateOptions, generate};
pub use init::{InitOptions, init};
pub use tables::tables;

/// Load the catalog snapshot named by the config.
fn load_catalog(config: &Config) -> Result<CatalogSnapshot> {
    CatalogSnapshot::from_file(&config.catalog_path)
        .wrap_err_with(|| format!("Failed to load catalog '{}'", config.catalog_path.display()))
}

/// The configured template directory, or the built-in templates.
fn template_source(config: &Config) -> Box<dyn TemplateSource> {
    match &config.template_dir {
        Some(dir) => Box::new(DirTemplateSource::new(dir)),
        None => Box::new(BuiltinTemplates),
    }
}

/// Human-readable name of where templates come from.
fn template_origin(config: &Config) -> String {
    match &config.template_dir {
        Some(dir) => dir.display().to_string(),
        None => "built-in".to_string(),
    }
}
