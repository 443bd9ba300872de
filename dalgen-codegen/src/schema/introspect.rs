use dalgen_core::{TypeMapper, upper_first};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use super::Table;
use crate::catalog::{SchemaAccessError, SchemaCatalog};

/// Builds the table model from a schema catalog.
///
/// Tables come back in catalog order with their columns in catalog order.
/// Any catalog failure aborts the whole introspection, as do two tables
/// whose type names would be the same.
pub struct SchemaIntrospector<'a> {
    mapper: &'a dyn TypeMapper,
}

impl<'a> SchemaIntrospector<'a> {
    pub fn new(mapper: &'a dyn TypeMapper) -> Self {
        Self { mapper }
    }

    pub fn introspect(&self, catalog: &dyn SchemaCatalog) -> Result<Vec<Table>, SchemaAccessError> {
        let names = catalog.table_names()?;
        let mut tables = Vec::with_capacity(names.len());
        let mut seen: IndexMap<String, String> = IndexMap::with_capacity(names.len());

        for storage_name in names {
            let name = upper_first(&storage_name);
            if let Some(first) = seen.get(&name) {
                return Err(SchemaAccessError::DuplicateTable {
                    name,
                    first: first.clone(),
                    second: storage_name,
                });
            }
            seen.insert(name, storage_name.clone());

            let primary_keys = catalog.primary_key_names(&storage_name)?;
            let identity = catalog.identity_column_names(&storage_name)?;
            let columns = catalog.columns(&storage_name)?;

            let mut table = Table::new(storage_name);
            table.set_primary_key_names(primary_keys);
            table.set_identity_column_names(identity);
            for info in columns {
                table.push_column(info, self.mapper);
            }

            for column in table.columns().iter().filter(|c| c.family().is_none()) {
                warn!(
                    table = table.storage_name(),
                    column = column.name(),
                    storage_type = column.storage_type(),
                    "unrecognized storage type, passing it through"
                );
            }

            debug!(
                table = table.storage_name(),
                name = table.name(),
                columns = table.columns().len(),
                primary_keys = table.primary_key_names().len(),
                "introspected table"
            );
            tables.push(table);
        }

        info!(
            tables = tables.len(),
            language = self.mapper.language(),
            "introspected schema"
        );
        Ok(tables)
    }
}
