use dalgen_core::{TypeMapper, upper_first};
use indexmap::IndexSet;

use super::Column;
use crate::{
    catalog::ColumnInfo,
    template::{FieldMap, NamedFields},
};

/// Name of the generic repository every table repository builds on.
pub const COMPANION_REPOSITORY: &str = "GenericRepository";

/// An introspected table.
///
/// `name` is the type name used in generated code: the storage name with its
/// first letter capitalized. `storage_name` is the name the catalog knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    storage_name: String,
    columns: Vec<Column>,
    primary_key_names: IndexSet<String>,
    identity_column_names: IndexSet<String>,
}

impl Table {
    pub(crate) fn new(storage_name: impl Into<String>) -> Self {
        let storage_name = storage_name.into();
        Self {
            name: upper_first(&storage_name),
            storage_name,
            columns: Vec::new(),
            primary_key_names: IndexSet::new(),
            identity_column_names: IndexSet::new(),
        }
    }

    pub(crate) fn set_primary_key_names(&mut self, names: impl IntoIterator<Item = String>) {
        self.primary_key_names = names.into_iter().collect();
    }

    pub(crate) fn set_identity_column_names(&mut self, names: impl IntoIterator<Item = String>) {
        self.identity_column_names = names.into_iter().collect();
    }

    /// Append a column, annotating it against this table's key sets.
    pub(crate) fn push_column(&mut self, info: ColumnInfo, mapper: &dyn TypeMapper) {
        let column = Column::new(
            info,
            &self.primary_key_names,
            &self.identity_column_names,
            mapper,
        );
        self.columns.push(column);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_name(&self) -> &str {
        &self.storage_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn primary_key_names(&self) -> &IndexSet<String> {
        &self.primary_key_names
    }

    pub fn identity_column_names(&self) -> &IndexSet<String> {
        &self.identity_column_names
    }

    /// The first primary key column, if the table has one.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_primary_key())
    }
}

impl NamedFields for Table {
    fn named_fields(&self) -> FieldMap {
        let primary_key = self.primary_key();
        FieldMap::new()
            .with("TableName", &self.name)
            .with("StorageName", &self.storage_name)
            .with("RepositoryName", COMPANION_REPOSITORY)
            .with_optional("PrimaryKeyName", primary_key.map(|c| c.name().to_string()))
            .with_optional(
                "PrimaryKeyType",
                primary_key.map(|c| c.mapped_type().to_string()),
            )
            .with(
                "ColumnNames",
                self.columns
                    .iter()
                    .map(Column::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
    }
}
