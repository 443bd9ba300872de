//! Schema catalog access.
//!
//! A [`SchemaCatalog`] answers the four questions the introspector asks of a
//! database: which tables exist, which columns form each primary key, which
//! columns are identity columns, and what every column looks like.

mod snapshot;

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub use snapshot::{CatalogSnapshot, TableSnapshot};

/// Raw metadata for one column as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnInfo {
    pub name: String,
    /// Storage type name, e.g. `varchar`
    #[serde(rename = "type")]
    pub storage_type: String,
    #[serde(default)]
    pub nullable: bool,
    /// Maximum length; `-1` means unbounded
    #[serde(default)]
    pub length: Option<i32>,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, storage_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_type: storage_type.into(),
            nullable: false,
            length: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = Some(length);
        self
    }
}

/// Read access to a relational schema catalog.
pub trait SchemaCatalog {
    /// Names of all user tables, in catalog order.
    fn table_names(&self) -> Result<Vec<String>, SchemaAccessError>;

    /// Column names forming the primary key of `table`.
    fn primary_key_names(&self, table: &str) -> Result<Vec<String>, SchemaAccessError>;

    /// Column names whose values the database generates.
    fn identity_column_names(&self, table: &str) -> Result<Vec<String>, SchemaAccessError>;

    /// Column metadata of `table`, in catalog order.
    fn columns(&self, table: &str) -> Result<Vec<ColumnInfo>, SchemaAccessError>;
}

#[derive(Debug, Error)]
pub enum SchemaAccessError {
    #[error("failed to read catalog '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog '{origin}'")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed catalog '{origin}'")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported catalog format '{path}' (expected a .toml or .json file)")]
    UnsupportedFormat { path: PathBuf },

    #[error("table '{table}' is not in the catalog")]
    UnknownTable { table: String },

    #[error("tables '{first}' and '{second}' both map to the type name '{name}'")]
    DuplicateTable {
        name: String,
        first: String,
        second: String,
    },

    #[error("catalog query failed: {message}")]
    Query { message: String },
}
