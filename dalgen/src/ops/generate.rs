//! Generate operation - code generation from a catalog.

use dalgen_codegen::{Config, DirectoryOutput, Generator};
use eyre::{Context, Result};

use super::{load_catalog, template_source};
use crate::reports::{GenerationReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Loads the catalog and templates named by the config, then writes or
/// previews every generated file.
pub fn generate(config: Config, opts: GenerateOptions) -> Result<GenerationReport> {
    let catalog = load_catalog(&config)?;
    let templates = template_source(&config);

    let namespace = config.base_namespace.clone();
    let context_name = config.context_name.clone();
    let multi_file = config.multi_file;
    let output_dir = config.output_dir.clone();
    let generator = Generator::new(config);

    let result = if opts.dry_run {
        let files = generator
            .preview(&catalog, templates.as_ref())
            .wrap_err("Failed to generate code")?;
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut sink = DirectoryOutput::new(&output_dir, generator.config().layout());
        let report = generator
            .run(&catalog, templates.as_ref(), &mut sink)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir,
            tables: report.tables,
            files: report.written,
        })
    };

    Ok(GenerationReport {
        namespace,
        context_name,
        multi_file,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const CATALOG: &str = r#"
        [[tables]]
        name = "orders"
        primary_key = ["id"]

        [[tables.columns]]
        name = "id"
        type = "int"
    "#;

    fn config(temp: &TempDir) -> Config {
        fs::write(temp.path().join("schema.toml"), CATALOG).unwrap();
        let mut config = Config::new("Shop")
            .with_context("ShopContext", "\"Data Source=.\"")
            .with_output_dir(temp.path().join("generated"));
        config.catalog_path = temp.path().join("schema.toml");
        config
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();

        let report = generate(config(&temp), GenerateOptions { dry_run: false }).unwrap();

        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.tables, 1);
                assert_eq!(written.files.len(), 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(temp.path().join("generated/Models/ShopContext.cs").is_file());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();

        let report = generate(
            config(&temp).with_multi_file(true),
            GenerateOptions { dry_run: true },
        )
        .unwrap();

        match report.result {
            GenerationResult::Preview(preview) => assert_eq!(preview.files.len(), 4),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!temp.path().join("generated").exists());
    }

    #[test]
    fn test_missing_catalog() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new("Shop");
        config.catalog_path = temp.path().join("nope.toml");

        let err = generate(config, GenerateOptions { dry_run: true }).unwrap_err();
        assert!(err.to_string().contains("Failed to load catalog"));
    }
}
