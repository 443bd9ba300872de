//! Init command report data structures.

use std::path::PathBuf;

use dalgen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from project scaffolding.
#[derive(Debug)]
pub struct InitReport {
    /// Project directory.
    pub dir: PathBuf,
    /// Root namespace written into dalgen.toml.
    pub namespace: String,
    /// Scaffolded files, relative to the project directory.
    pub files: Vec<InitFile>,
}

/// One scaffolded file.
#[derive(Debug)]
pub struct InitFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Project", &self.dir.display().to_string());
        out.key_value("Namespace", &self.namespace);
        out.newline();

        for file in &self.files {
            let path = file.path.display().to_string();
            match file.result {
                WriteResult::Written => out.added_item(&path),
                WriteResult::Skipped => out.kept_item(&format!("{} (exists)", path)),
            }
        }

        out.newline();
        out.preformatted("Edit schema.toml to describe your database, then run 'dalgen generate'.");
    }
}
