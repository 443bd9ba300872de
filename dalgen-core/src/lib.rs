//! Core utilities and types for the dalgen generator.
//!
//! This crate provides the storage type mapping and file writing
//! primitives shared by the rest of the workspace.

mod file;
mod type_mapper;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Type mapping
pub use type_mapper::{CSharpTypeMapper, StorageFamily, TypeMapper};
// String utilities
pub use utils::{ensure_trailing_newline, to_pascal_case, upper_first};
