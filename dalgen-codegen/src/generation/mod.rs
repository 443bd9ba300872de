//! Run orchestration and generated output.
//!
//! - [`Config`] - Run-scoped settings, built from a manifest
//! - [`Generator`] - Introspect, render and write one run
//! - [`OutputSink`] - Where generated files go (directory or memory)
//! - [`ManifestFile`], [`SampleCatalogFile`], [`TemplateFile`] - `dalgen init` scaffolding

mod config;
mod generator;
mod output;
mod scaffold;

pub use config::Config;
pub use generator::{CONTEXT_REPOSITORY_FILE, GenerateReport, Generator, PreviewFile};
pub use output::{DirectoryOutput, MemoryOutput, OutputFile, OutputGroup, OutputLayout, OutputSink};
pub use scaffold::{ManifestFile, SampleCatalogFile, TemplateFile};
