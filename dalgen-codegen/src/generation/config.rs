use std::path::{Path, PathBuf};

use dalgen_manifest::Manifest;

use super::OutputLayout;
use crate::{
    render::RenderHooks,
    template::{FieldMap, NamedFields},
};

/// Settings for one generation run.
///
/// Built once, then handed to the [`Generator`](super::Generator), which
/// only reads it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root namespace of the generated code
    pub base_namespace: String,
    /// Template directory; built-in templates when `None`
    pub template_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Catalog snapshot the schema is read from
    pub catalog_path: PathBuf,
    /// Type name of the data context
    pub context_name: String,
    /// Expression passed to the data context's base constructor
    pub context_connection: Option<String>,
    pub model_folder: String,
    pub model_namespace: String,
    pub repository_folder: String,
    pub repository_namespace: String,
    /// One file per table instead of one file per group
    pub multi_file: bool,
    /// Extension of generated files, without the dot
    pub extension: String,
    pub hooks: RenderHooks,
}

impl Config {
    pub fn new(base_namespace: impl Into<String>) -> Self {
        Self {
            base_namespace: base_namespace.into(),
            template_dir: None,
            output_dir: PathBuf::from("generated"),
            catalog_path: PathBuf::from("schema.toml"),
            context_name: "ModelContext".to_string(),
            context_connection: None,
            model_folder: "Models".to_string(),
            model_namespace: "Models".to_string(),
            repository_folder: "Repositories".to_string(),
            repository_namespace: "Repositories".to_string(),
            multi_file: false,
            extension: "cs".to_string(),
            hooks: RenderHooks::default(),
        }
    }

    /// Build a config from a manifest, resolving paths against `base_dir`.
    pub fn from_manifest(manifest: &Manifest, base_dir: &Path) -> Self {
        Self {
            base_namespace: manifest.project.namespace.clone(),
            template_dir: manifest.templates.dir.as_ref().map(|dir| base_dir.join(dir)),
            output_dir: base_dir.join(&manifest.output.dir),
            catalog_path: base_dir.join(&manifest.catalog.path),
            context_name: manifest.context.name.clone(),
            context_connection: manifest.context.connection.clone(),
            model_folder: manifest.models.folder.clone(),
            model_namespace: manifest.models.namespace.clone(),
            repository_folder: manifest.repositories.folder.clone(),
            repository_namespace: manifest.repositories.namespace.clone(),
            multi_file: manifest.project.multi_file,
            extension: manifest.project.extension.clone(),
            hooks: RenderHooks::default(),
        }
    }

    pub fn with_context(mut self, name: impl Into<String>, connection: impl Into<String>) -> Self {
        self.context_name = name.into();
        self.context_connection = Some(connection.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_multi_file(mut self, multi_file: bool) -> Self {
        self.multi_file = multi_file;
        self
    }

    pub fn with_hooks(mut self, hooks: RenderHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Folder names and extension used to place generated files.
    pub fn layout(&self) -> OutputLayout {
        OutputLayout {
            models_folder: self.model_folder.clone(),
            repositories_folder: self.repository_folder.clone(),
            extension: self.extension.clone(),
        }
    }
}

impl NamedFields for Config {
    fn named_fields(&self) -> FieldMap {
        FieldMap::new()
            .with("BaseNamespace", &self.base_namespace)
            .with("ModelNamespace", &self.model_namespace)
            .with("RepositoryNamespace", &self.repository_namespace)
            .with("ContextName", &self.context_name)
            .with_optional("ContextConnection", self.context_connection.clone())
            .with("ModelFolder", &self.model_folder)
            .with("RepositoryFolder", &self.repository_folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_manifest_resolves_paths() {
        let manifest: Manifest = r#"
            [project]
            namespace = "Shop.Data"
            multi_file = true

            [catalog]
            path = "db/schema.json"

            [templates]
            dir = "tpl"

            [context]
            name = "ShopContext"
            connection = '"Data Source=."'

            [repositories]
            folder = "Repos"
        "#
        .parse()
        .unwrap();

        let config = Config::from_manifest(&manifest, Path::new("/work/shop"));

        assert_eq!(config.catalog_path, PathBuf::from("/work/shop/db/schema.json"));
        assert_eq!(config.template_dir, Some(PathBuf::from("/work/shop/tpl")));
        assert_eq!(config.output_dir, PathBuf::from("/work/shop/generated"));
        assert_eq!(config.context_connection.as_deref(), Some("\"Data Source=.\""));
        assert!(config.multi_file);
        assert_eq!(config.layout().repositories_folder, "Repos");
        assert_eq!(config.layout().models_folder, "Models");
    }

    #[test]
    fn test_named_fields() {
        let fields = Config::new("Shop").named_fields();

        assert_eq!(fields.get("BaseNamespace"), Some(Some("Shop")));
        assert_eq!(fields.get("ModelNamespace"), Some(Some("Models")));
        assert_eq!(fields.get("RepositoryNamespace"), Some(Some("Repositories")));
        assert_eq!(fields.get("ContextName"), Some(Some("ModelContext")));
        assert_eq!(fields.get("ContextConnection"), Some(None));
        assert_eq!(fields.get("ModelFolder"), Some(Some("Models")));
        assert_eq!(fields.get("RepositoryFolder"), Some(Some("Repositories")));
    }

    #[test]
    fn test_with_context_sets_connection() {
        let fields = Config::new("Shop")
            .with_context("ShopContext", "\"Shop\"")
            .named_fields();

        assert_eq!(fields.get("ContextName"), Some(Some("ShopContext")));
        assert_eq!(fields.get("ContextConnection"), Some(Some("\"Shop\"")));
    }
}
