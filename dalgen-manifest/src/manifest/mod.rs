//! Manifest types and parsing for dalgen.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::DalgenToml;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for dalgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    pub project: ProjectConfig,

    /// Where the schema catalog is read from
    pub catalog: CatalogConfig,

    /// Template directory (built-in templates when absent)
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Output location
    #[serde(default)]
    pub output: OutputConfig,

    /// Aggregate data context
    #[serde(default)]
    pub context: ContextConfig,

    /// Entity output group
    #[serde(default)]
    pub models: ModelsConfig,

    /// Repository output group
    #[serde(default)]
    pub repositories: RepositoriesConfig,
}

/// `[project]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root namespace of the generated code
    pub namespace: String,

    /// Write one file per table instead of one file per group
    #[serde(default)]
    pub multi_file: bool,

    /// Extension of generated files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// `[catalog]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to a catalog snapshot (`.toml` or `.json`)
    pub path: PathBuf,
}

/// `[templates]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    pub dir: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// `[context]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    /// Type name of the generated data context
    #[serde(default = "default_context_name")]
    pub name: String,

    /// Expression passed to the context's base constructor
    pub connection: Option<String>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            name: default_context_name(),
            connection: None,
        }
    }
}

/// `[models]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelsConfig {
    #[serde(default = "default_models")]
    pub folder: String,
    #[serde(default = "default_models")]
    pub namespace: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            folder: default_models(),
            namespace: default_models(),
        }
    }
}

/// `[repositories]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoriesConfig {
    #[serde(default = "default_repositories")]
    pub folder: String,
    #[serde(default = "default_repositories")]
    pub namespace: String,
}

impl Default for RepositoriesConfig {
    fn default() -> Self {
        Self {
            folder: default_repositories(),
            namespace: default_repositories(),
        }
    }
}

fn default_extension() -> String {
    "cs".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_context_name() -> String {
    "ModelContext".to_string()
}

fn default_models() -> String {
    "Models".to_string()
}

fn default_repositories() -> String {
    "Repositories".to_string()
}
