use dalgen_core::{StorageFamily, TypeMapper};
use indexmap::IndexSet;

use crate::catalog::ColumnInfo;

/// Length value marking an unbounded (`max`) column.
pub const UNBOUNDED_LENGTH: i32 = -1;

/// A column of an introspected table.
///
/// Key flags are derived from the owning table's key sets and the mapped
/// type is computed once nullability is known, so neither can disagree
/// with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    storage_type: String,
    mapped_type: String,
    is_nullable: bool,
    is_primary_key: bool,
    is_generated: bool,
    length: Option<i32>,
}

impl Column {
    pub(crate) fn new(
        info: ColumnInfo,
        primary_key_names: &IndexSet<String>,
        identity_column_names: &IndexSet<String>,
        mapper: &dyn TypeMapper,
    ) -> Self {
        let mapped_type = mapper.map(&info.storage_type, info.nullable);
        Self {
            is_primary_key: primary_key_names.contains(&info.name),
            is_generated: identity_column_names.contains(&info.name),
            name: info.name,
            storage_type: info.storage_type,
            mapped_type,
            is_nullable: info.nullable,
            length: info.length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw storage type as reported by the catalog.
    pub fn storage_type(&self) -> &str {
        &self.storage_type
    }

    /// Target-language type.
    pub fn mapped_type(&self) -> &str {
        &self.mapped_type
    }

    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    /// Whether the database generates this column's value.
    pub fn is_generated(&self) -> bool {
        self.is_generated
    }

    pub fn length(&self) -> Option<i32> {
        self.length
    }

    /// Storage family, or `None` for types the mapper passes through.
    pub fn family(&self) -> Option<StorageFamily> {
        StorageFamily::classify(&self.storage_type)
    }

    pub fn is_unbounded(&self) -> bool {
        self.length == Some(UNBOUNDED_LENGTH)
    }
}
