//! Tables operation - show the introspected schema.

use dalgen_codegen::{Config, Generator};
use eyre::{Context, Result};

use super::load_catalog;
use crate::reports::{ColumnSummary, TableSummary, TablesReport};

/// Execute the tables operation.
pub fn tables(config: &Config) -> Result<TablesReport> {
    let catalog = load_catalog(config)?;
    let tables = Generator::new(config.clone())
        .introspect(&catalog)
        .wrap_err("Failed to read the catalog")?;

    let tables = tables
        .iter()
        .map(|table| TableSummary {
            name: table.name().to_string(),
            storage_name: table.storage_name().to_string(),
            columns: table
                .columns()
                .iter()
                .map(|column| {
                    let mut flags = Vec::new();
                    if column.is_primary_key() {
                        flags.push("primary key");
                    }
                    if column.is_generated() {
                        flags.push("generated");
                    }
                    if column.family().is_none() {
                        flags.push("unmapped");
                    }
                    ColumnSummary {
                        name: column.name().to_string(),
                        storage_type: match column.length() {
                            Some(-1) => format!("{}(max)", column.storage_type()),
                            Some(length) if length > 0 => {
                                format!("{}({})", column.storage_type(), length)
                            }
                            _ => column.storage_type().to_string(),
                        },
                        mapped_type: column.mapped_type().to_string(),
                        flags,
                    }
                })
                .collect(),
        })
        .collect();

    Ok(TablesReport { tables })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_tables_summary() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("schema.json"),
            r#"{"tables": [{"name": "orders", "primary_key": ["id"], "identity": ["id"],
                "columns": [{"name": "id", "type": "int"},
                            {"name": "note", "type": "varchar", "nullable": true, "length": -1}]}]}"#,
        )
        .unwrap();
        let mut config = Config::new("Shop");
        config.catalog_path = temp.path().join("schema.json");

        let report = tables(&config).unwrap();

        assert_eq!(report.tables.len(), 1);
        let orders = &report.tables[0];
        assert_eq!(orders.name, "Orders");
        assert_eq!(orders.storage_name, "orders");
        assert_eq!(orders.columns[0].flags, ["primary key", "generated"]);
        assert_eq!(orders.columns[1].storage_type, "varchar(max)");
        assert_eq!(orders.columns[1].mapped_type, "string");
        assert!(orders.columns[1].flags.is_empty());
    }
}
