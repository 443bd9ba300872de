use std::path::{Path, PathBuf};

use dalgen_core::{File, FileRules, WriteResult};
use eyre::Result;

/// The two kinds of generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputGroup {
    Models,
    Repositories,
}

/// One generated file, before it is placed anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub group: OutputGroup,
    /// File name without folder or extension
    pub name: String,
    pub content: String,
}

impl OutputFile {
    pub fn new(group: OutputGroup, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            group,
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Where each group's files are placed relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub models_folder: String,
    pub repositories_folder: String,
    pub extension: String,
}

impl OutputLayout {
    pub fn folder(&self, group: OutputGroup) -> &str {
        match group {
            OutputGroup::Models => &self.models_folder,
            OutputGroup::Repositories => &self.repositories_folder,
        }
    }

    /// `<folder>/<name>.<extension>`
    pub fn relative_path(&self, file: &OutputFile) -> PathBuf {
        Path::new(self.folder(file.group)).join(format!("{}.{}", file.name, self.extension))
    }
}

/// Destination for generated files.
pub trait OutputSink {
    fn write(&mut self, file: &OutputFile) -> Result<WriteResult>;
}

/// Writes each file under its group folder in an output directory,
/// replacing existing files.
#[derive(Debug, Clone)]
pub struct DirectoryOutput {
    root: PathBuf,
    layout: OutputLayout,
}

impl DirectoryOutput {
    pub fn new(root: impl Into<PathBuf>, layout: OutputLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, file: &OutputFile) -> PathBuf {
        self.root.join(self.layout.relative_path(file))
    }
}

impl OutputSink for DirectoryOutput {
    fn write(&mut self, file: &OutputFile) -> Result<WriteResult> {
        File::new(self.path_for(file), file.content.as_str())
            .with_rules(FileRules::always_overwrite())
            .write()
    }
}

/// Collects files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    files: Vec<OutputFile>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[OutputFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<OutputFile> {
        self.files
    }

    pub fn get(&self, group: OutputGroup, name: &str) -> Option<&OutputFile> {
        self.files
            .iter()
            .find(|file| file.group == group && file.name == name)
    }
}

impl OutputSink for MemoryOutput {
    fn write(&mut self, file: &OutputFile) -> Result<WriteResult> {
        self.files.push(file.clone());
        Ok(WriteResult::Written)
    }
}
