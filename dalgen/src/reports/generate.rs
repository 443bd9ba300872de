//! Generate command report data structures.

use std::path::PathBuf;

use dalgen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerationReport {
    /// Root namespace of the generated code.
    pub namespace: String,
    /// Data context type name.
    pub context_name: String,
    /// Whether one file per table was generated.
    pub multi_file: bool,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Number of introspected tables.
    pub tables: usize,
    /// Written files, relative to the output directory.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerationReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerationReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Namespace", &self.namespace);
        out.key_value("Context", &self.context_name);
        out.key_value(
            "Layout",
            if self.multi_file {
                "one file per table"
            } else {
                "one file per group"
            },
        );
        out.newline();

        out.section(&format!(
            "Generated from {} table{}",
            written.tables,
            if written.tables == 1 { "" } else { "s" }
        ));
        for file in &written.files {
            out.added_item(&written.output_dir.join(file).display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_written_report() {
        let report = GenerationReport {
            namespace: "Shop".to_string(),
            context_name: "ShopContext".to_string(),
            multi_file: false,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("generated"),
                tables: 1,
                files: vec![PathBuf::from("Models/ShopContext.cs")],
            }),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Namespace: Shop",
                "Context: ShopContext",
                "Layout: one file per group",
                "",
                "Generated from 1 table:",
                "  + generated/Models/ShopContext.cs",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerationReport {
            namespace: "Shop".to_string(),
            context_name: "ShopContext".to_string(),
            multi_file: true,
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "Models/Orders.cs".to_string(),
                    content: "namespace Shop.Models\n".to_string(),
                }],
            }),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── Models/Orders.cs ──",
                "namespace Shop.Models\n",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
