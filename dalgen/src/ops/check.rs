//! Check operation - validate catalog and templates without writing.

use std::path::Path;

use dalgen_codegen::{CatalogSnapshot, Config, Generator, TemplateName};

use super::{template_origin, template_source};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Collects every problem instead of stopping at the first one. The
/// manifest itself has already been validated when it was opened.
pub fn check(config: &Config, config_path: &Path) -> eyre::Result<CheckReport> {
    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        catalog_path: config.catalog_path.clone(),
        templates: template_origin(config),
        tables: None,
        files: None,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let catalog = match CatalogSnapshot::from_file(&config.catalog_path) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            report.errors.push(format!("{:#}", eyre::Report::new(e)));
            None
        }
    };

    let source = template_source(config);
    let mut templates_ok = true;
    for name in TemplateName::ALL {
        if let Err(e) = source.load(name) {
            report.errors.push(format!("{:#}", eyre::Report::new(e)));
            templates_ok = false;
        }
    }

    let Some(catalog) = catalog else {
        return Ok(report);
    };

    let generator = Generator::new(config.clone());
    let tables = match generator.introspect(&catalog) {
        Ok(tables) => tables,
        Err(e) => {
            report.errors.push(format!("{:#}", eyre::Report::new(e)));
            return Ok(report);
        }
    };
    report.tables = Some(tables.len());

    for table in &tables {
        for column in table.columns().iter().filter(|c| c.family().is_none()) {
            report.warnings.push(format!(
                "{}.{}: storage type '{}' is passed through unmapped",
                table.storage_name(),
                column.name(),
                column.storage_type()
            ));
        }
    }

    if templates_ok {
        match generator.render(&tables, source.as_ref()) {
            Ok(files) => report.files = Some(files.len()),
            Err(e) => report.errors.push(format!("{:#}", eyre::Report::new(e))),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn config(temp: &TempDir, catalog: &str) -> Config {
        fs::write(temp.path().join("schema.toml"), catalog).unwrap();
        let mut config = Config::new("Shop").with_context("ShopContext", "\"Data Source=.\"");
        config.catalog_path = temp.path().join("schema.toml");
        config
    }

    #[test]
    fn test_valid_project() {
        let temp = TempDir::new().unwrap();
        let config = config(
            &temp,
            "[[tables]]\nname = \"orders\"\n[[tables.columns]]\nname = \"shape\"\ntype = \"geography\"\n",
        );

        let report = check(&config, Path::new("dalgen.toml")).unwrap();

        assert!(report.is_valid(), "{:?}", report.errors);
        assert_eq!(report.tables, Some(1));
        assert_eq!(report.files, Some(2));
        assert_eq!(
            report.warnings,
            ["orders.shape: storage type 'geography' is passed through unmapped"]
        );
    }

    #[test]
    fn test_collects_every_problem() {
        let temp = TempDir::new().unwrap();
        let mut config = config(&temp, "not = [valid");
        config.template_dir = Some(temp.path().join("missing"));

        let report = check(&config, Path::new("dalgen.toml")).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1 + TemplateName::ALL.len());
        assert_eq!(report.tables, None);
    }

    #[test]
    fn test_missing_connection_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut config = config(&temp, "[[tables]]\nname = \"orders\"\n");
        config.context_connection = None;

        let report = check(&config, Path::new("dalgen.toml")).unwrap();

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("ContextConnection"));
    }
}
