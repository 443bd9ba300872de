//! Code generation for the dalgen data-access-layer generator.
//!
//! This crate turns a relational schema catalog into C# entity classes,
//! an aggregate data context and repository classes.
//!
//! # Module Organization
//!
//! - [`catalog`] - Schema catalog access (SchemaCatalog, CatalogSnapshot)
//! - [`schema`] - Introspected schema model (Table, Column, SchemaIntrospector)
//! - [`template`] - Template loading and substitution (fill_fields, fill_blocks)
//! - [`render`] - Entity, context and repository renderers plus RenderHooks
//! - [`builder`] - Code generation building blocks (CodeBuilder)
//! - [`generation`] - Run orchestration and output (Generator, OutputSink)

pub mod builder;
pub mod catalog;
pub mod generation;
pub mod render;
pub mod schema;
pub mod template;

#[cfg(test)]
mod testing;

pub use catalog::{CatalogSnapshot, ColumnInfo, SchemaAccessError, SchemaCatalog, TableSnapshot};
pub use generation::{
    Config, DirectoryOutput, GenerateReport, Generator, MemoryOutput, OutputFile, OutputGroup,
    OutputLayout, OutputSink, PreviewFile,
};
pub use render::{ContextRenderer, EntityRenderer, RenderHooks, RenderedUnit, RepositoryRenderer};
pub use schema::{Column, SchemaIntrospector, Table};
pub use template::{
    BuiltinTemplates, DirTemplateSource, FieldMap, NamedFields, TemplateError, TemplateName,
    TemplateSource, fill_blocks, fill_fields,
};
