//! Introspected schema model.
//!
//! - [`Table`] - A table with its ordered columns and key sets
//! - [`Column`] - A column annotated with its mapped type and key flags
//! - [`SchemaIntrospector`] - Builds tables from a [`SchemaCatalog`](crate::SchemaCatalog)

mod column;
mod introspect;
mod table;

pub use column::{Column, UNBOUNDED_LENGTH};
pub use introspect::SchemaIntrospector;
pub use table::{COMPANION_REPOSITORY, Table};
