//! Renderers turning introspected tables into C# source text.
//!
//! - [`EntityRenderer`] - One entity class per table
//! - [`ContextRenderer`] - The aggregate data context members
//! - [`RepositoryRenderer`] - Per-table repositories inside the repository frame
//! - [`RenderHooks`] - Overridable type conversion and decoration

mod context;
mod entity;
mod hooks;
mod repository;

use indexmap::IndexMap;

pub use context::ContextRenderer;
pub use entity::EntityRenderer;
pub use hooks::{
    RenderHooks, default_class_decoration, default_column_decoration, default_convert_type,
};
pub use repository::RepositoryRenderer;

/// Generated text per table name, in introspection order.
pub type RenderedUnit = IndexMap<String, String>;

/// Join generated blocks with a single blank line between them.
///
/// Trailing newlines are dropped so the result can replace a sentinel line
/// without leaving a gap before the frame's closing lines.
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks
        .into_iter()
        .map(|block| block.as_ref().trim_end_matches(['\n', '\r']).to_string())
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
