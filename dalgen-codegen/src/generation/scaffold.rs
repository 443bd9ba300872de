//! Files written by `dalgen init`.

use std::path::{Path, PathBuf};

use dalgen_core::{FileRules, GeneratedFile, Overwrite};

use crate::template::TemplateName;

/// The dalgen.toml manifest of a new project.
pub struct ManifestFile {
    pub namespace: String,
    pub context_name: String,
    pub database: String,
    pub overwrite: Overwrite,
}

impl ManifestFile {
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let database = namespace
            .split('.')
            .next()
            .unwrap_or(namespace.as_str())
            .to_string();
        Self {
            context_name: format!("{}Context", database),
            database,
            namespace,
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for ManifestFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("dalgen.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
namespace = "{namespace}"
# Write one file per table instead of one file per group
multi_file = false

[catalog]
# Catalog snapshot (.toml or .json) describing tables, keys and columns
path = "schema.toml"

[templates]
# Remove to use the built-in templates
dir = "templates"

[output]
dir = "generated"

[context]
name = "{context}"
# C# expression passed to the data context's base constructor
connection = '"Data Source=.;Initial Catalog={database};Integrated Security=True"'

[models]
folder = "Models"
namespace = "Models"

[repositories]
folder = "Repositories"
namespace = "Repositories"
"#,
            namespace = self.namespace,
            context = self.context_name,
            database = self.database,
        )
    }
}

/// A sample catalog snapshot to start from.
pub struct SampleCatalogFile;

impl GeneratedFile for SampleCatalogFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("schema.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        include_str!("../../assets/schema.toml").to_string()
    }
}

/// One built-in template, copied out for editing.
pub struct TemplateFile {
    pub name: TemplateName,
    pub dir: PathBuf,
}

impl TemplateFile {
    pub fn new(name: TemplateName, dir: impl Into<PathBuf>) -> Self {
        Self {
            name,
            dir: dir.into(),
        }
    }

    /// Every built-in template under `dir`.
    pub fn all(dir: impl Into<PathBuf>) -> Vec<Self> {
        let dir = dir.into();
        TemplateName::ALL
            .into_iter()
            .map(|name| Self::new(name, dir.clone()))
            .collect()
    }
}

impl GeneratedFile for TemplateFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(self.name.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        self.name.builtin().to_string()
    }
}

#[cfg(test)]
mod tests {
    use dalgen_core::WriteResult;
    use dalgen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::{CatalogSnapshot, SchemaCatalog};

    #[test]
    fn test_manifest_file_parses() {
        let file = ManifestFile::new("Shop.Data");
        let manifest: Manifest = file.render().parse().unwrap();

        assert_eq!(manifest.project.namespace, "Shop.Data");
        assert_eq!(manifest.context.name, "ShopContext");
        assert_eq!(
            manifest.context.connection.as_deref(),
            Some("\"Data Source=.;Initial Catalog=Shop;Integrated Security=True\"")
        );
        assert_eq!(manifest.templates.dir, Some(PathBuf::from("templates")));
    }

    #[test]
    fn test_sample_catalog_parses() {
        let catalog = CatalogSnapshot::from_toml_str(&SampleCatalogFile.render()).unwrap();
        assert_eq!(catalog.table_names().unwrap(), ["customers", "orders"]);
    }

    #[test]
    fn test_scaffold_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("templates/ModelFrame.txt");
        std::fs::create_dir_all(existing.parent().unwrap()).unwrap();
        std::fs::write(&existing, "custom").unwrap();

        let results: Vec<_> = TemplateFile::all("templates")
            .iter()
            .map(|file| file.write(temp.path()).unwrap())
            .collect();

        assert_eq!(results[0], WriteResult::Skipped);
        assert!(results[1..].iter().all(|r| *r == WriteResult::Written));
        assert_eq!(std::fs::read_to_string(existing).unwrap(), "custom");
        assert!(temp.path().join("templates/RepositoryBase.txt").exists());
    }
}
