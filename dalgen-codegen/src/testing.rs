//! Shared fixtures for unit tests.

use dalgen_core::CSharpTypeMapper;
use eyre::Result;

use crate::{
    catalog::{CatalogSnapshot, ColumnInfo, TableSnapshot},
    schema::{SchemaIntrospector, Table},
};

/// The `orders` table: an identity primary key and an unbounded note.
pub fn orders_catalog() -> CatalogSnapshot {
    CatalogSnapshot::new().with_table(
        TableSnapshot::new("orders")
            .primary_key("id")
            .identity("id")
            .column(ColumnInfo::new("id", "int"))
            .column(ColumnInfo::new("note", "varchar").nullable().with_length(-1)),
    )
}

/// Introspect a catalog with the C# type mapper.
pub fn introspect(catalog: &CatalogSnapshot) -> Result<Vec<Table>> {
    Ok(SchemaIntrospector::new(&CSharpTypeMapper).introspect(catalog)?)
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
