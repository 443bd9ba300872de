//! Init operation - scaffold a new project.

use std::path::Path;

use dalgen_codegen::generation::{ManifestFile, SampleCatalogFile, TemplateFile};
use dalgen_core::GeneratedFile;
use dalgen_manifest::Manifest;
use eyre::{Result, eyre};

use crate::reports::{InitFile, InitReport};

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Project directory.
    pub dir: &'a Path,
    /// Root namespace written into dalgen.toml.
    pub namespace: &'a str,
}

/// Execute the init operation.
///
/// Existing files are left untouched.
pub fn init(opts: InitOptions) -> Result<InitReport> {
    let manifest = ManifestFile::new(opts.namespace);
    Manifest::from_str_with_filename(&manifest.render(), "dalgen.toml")
        .map_err(|e| eyre!("'{}' cannot be used as a namespace: {}", opts.namespace, e))?;

    let mut files: Vec<Box<dyn GeneratedFile>> =
        vec![Box::new(manifest), Box::new(SampleCatalogFile)];
    for template in TemplateFile::all("templates") {
        files.push(Box::new(template));
    }

    let mut report = InitReport {
        dir: opts.dir.to_path_buf(),
        namespace: opts.namespace.to_string(),
        files: Vec::with_capacity(files.len()),
    };
    for file in &files {
        let path = file.path(opts.dir);
        let result = file.write(opts.dir)?;
        report.files.push(InitFile {
            path: path.strip_prefix(opts.dir).unwrap_or(&path).to_path_buf(),
            result,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use dalgen_codegen::Config;
    use dalgen_core::WriteResult;
    use dalgen_manifest::DalgenToml;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::{GenerateOptions, generate};

    #[test]
    fn test_init_then_generate() {
        let temp = TempDir::new().unwrap();

        let report = init(InitOptions {
            dir: temp.path(),
            namespace: "Shop.Data",
        })
        .unwrap();

        assert_eq!(report.files.len(), 8);
        assert_eq!(report.files[0].path, PathBuf::from("dalgen.toml"));
        assert!(report.files.iter().all(|f| f.result == WriteResult::Written));

        let dalgen_toml = DalgenToml::open(temp.path().join("dalgen.toml")).unwrap();
        let config = Config::from_manifest(dalgen_toml.manifest(), dalgen_toml.base_dir());
        generate(config, GenerateOptions { dry_run: false }).unwrap();

        let models = fs::read_to_string(temp.path().join("generated/Models/ShopContext.cs")).unwrap();
        assert!(models.contains("namespace Shop.Data.Models"));
        assert!(models.contains("public Table<Customers> Customers"));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("schema.toml"), "# mine\n").unwrap();

        let report = init(InitOptions {
            dir: temp.path(),
            namespace: "Shop",
        })
        .unwrap();

        assert_eq!(report.files[1].result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("schema.toml")).unwrap(),
            "# mine\n"
        );
    }

    #[test]
    fn test_init_rejects_keyword_namespace() {
        let temp = TempDir::new().unwrap();

        let err = init(InitOptions {
            dir: temp.path(),
            namespace: "Shop.class",
        })
        .unwrap_err();

        assert!(err.to_string().contains("Shop.class"));
        assert!(!temp.path().join("dalgen.toml").exists());
    }
}
