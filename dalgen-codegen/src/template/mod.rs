//! Template loading and substitution.
//!
//! Templates carry two kinds of markers:
//! - `[FieldName]` tokens, filled from an object's [`NamedFields`]
//! - `//[BlockName]` sentinels, replaced wholesale by generated blocks
//!
//! Both passes scan the template once; inserted text is never rescanned.

mod fields;
mod source;
mod substitute;

use std::path::PathBuf;

use thiserror::Error;

pub use fields::{FieldMap, NamedFields};
pub use source::{BuiltinTemplates, DirTemplateSource, TemplateName, TemplateSource};
pub use substitute::{PLACEHOLDER, fill_blocks, fill_fields, fill_placeholder, placeholder_name};

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template field '{field}' has no value")]
    MissingFieldValue { field: String },

    #[error("failed to read template '{name}' from '{path}'")]
    Read {
        name: TemplateName,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
