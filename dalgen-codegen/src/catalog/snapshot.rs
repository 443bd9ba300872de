//! File-backed catalog snapshots.

use std::path::Path;

use serde::Deserialize;

use super::{ColumnInfo, SchemaAccessError, SchemaCatalog};

/// A dump of a schema catalog, read from TOML or JSON.
///
/// ```toml
/// [[tables]]
/// name = "orders"
/// primary_key = ["id"]
/// identity = ["id"]
///
/// [[tables.columns]]
/// name = "id"
/// type = "int"
///
/// [[tables.columns]]
/// name = "note"
/// type = "varchar"
/// nullable = true
/// length = -1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSnapshot {
    #[serde(default)]
    tables: Vec<TableSnapshot>,
}

/// One table of a [`CatalogSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSnapshot {
    pub name: String,
    #[serde(default)]
    pub primary_key: Vec<String>,
    #[serde(default)]
    pub identity: Vec<String>,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

impl TableSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: Vec::new(),
            identity: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key.push(column.into());
        self
    }

    pub fn identity(mut self, column: impl Into<String>) -> Self {
        self.identity.push(column.into());
        self
    }

    pub fn column(mut self, column: ColumnInfo) -> Self {
        self.columns.push(column);
        self
    }
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, keeping insertion order.
    pub fn with_table(mut self, table: TableSnapshot) -> Self {
        self.tables.push(table);
        self
    }

    pub fn tables(&self) -> &[TableSnapshot] {
        &self.tables
    }

    /// Load a snapshot, picking the format from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaAccessError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str, &str) -> Result<Self, SchemaAccessError> = match extension.as_deref()
        {
            Some("toml") => Self::parse_toml,
            Some("json") => Self::parse_json,
            _ => {
                return Err(SchemaAccessError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| SchemaAccessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SchemaAccessError> {
        Self::parse_toml(content, "<toml>")
    }

    pub fn from_json_str(content: &str) -> Result<Self, SchemaAccessError> {
        Self::parse_json(content, "<json>")
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self, SchemaAccessError> {
        toml::from_str(content).map_err(|source| SchemaAccessError::Toml {
            origin: origin.to_string(),
            source,
        })
    }

    fn parse_json(content: &str, origin: &str) -> Result<Self, SchemaAccessError> {
        serde_json::from_str(content).map_err(|source| SchemaAccessError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn table(&self, name: &str) -> Result<&TableSnapshot, SchemaAccessError> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
            .ok_or_else(|| SchemaAccessError::UnknownTable {
                table: name.to_string(),
            })
    }
}

impl SchemaCatalog for CatalogSnapshot {
    fn table_names(&self) -> Result<Vec<String>, SchemaAccessError> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn primary_key_names(&self, table: &str) -> Result<Vec<String>, SchemaAccessError> {
        Ok(self.table(table)?.primary_key.clone())
    }

    fn identity_column_names(&self, table: &str) -> Result<Vec<String>, SchemaAccessError> {
        Ok(self.table(table)?.identity.clone())
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnInfo>, SchemaAccessError> {
        Ok(self.table(table)?.columns.clone())
    }
}
