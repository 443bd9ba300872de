//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Path to the catalog snapshot.
    pub catalog_path: PathBuf,
    /// Where templates are loaded from.
    pub templates: String,
    /// Number of tables, once the catalog was read.
    pub tables: Option<usize>,
    /// Number of files a run would write, once rendering succeeded.
    pub files: Option<usize>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Catalog", &self.catalog_path.display().to_string());
        out.key_value("Templates", &self.templates);
        if let Some(tables) = self.tables {
            out.key_value("Tables", &tables.to_string());
        }
        if let Some(files) = self.files {
            out.key_value("Files", &files.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_invalid_report_lists_errors_only() {
        let report = CheckReport {
            config_path: PathBuf::from("dalgen.toml"),
            catalog_path: PathBuf::from("schema.toml"),
            templates: "built-in".to_string(),
            tables: None,
            files: None,
            errors: vec!["failed to read catalog 'schema.toml'".to_string()],
            warnings: Vec::new(),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            ["error: failed to read catalog 'schema.toml'", ""]
        );
    }
}
