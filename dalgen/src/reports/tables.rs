//! Tables command report data structures.

use super::output::{Output, Report};

/// Report data listing introspected tables.
#[derive(Debug)]
pub struct TablesReport {
    pub tables: Vec<TableSummary>,
}

/// One table and its columns.
#[derive(Debug)]
pub struct TableSummary {
    /// Type name used in generated code.
    pub name: String,
    /// Name in the catalog.
    pub storage_name: String,
    pub columns: Vec<ColumnSummary>,
}

/// One column with its mapping.
#[derive(Debug)]
pub struct ColumnSummary {
    pub name: String,
    /// Storage type with its length, if any.
    pub storage_type: String,
    pub mapped_type: String,
    /// Key and mapping notes.
    pub flags: Vec<&'static str>,
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.tables.is_empty() {
            out.preformatted("No tables in the catalog");
            return;
        }

        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            if table.name == table.storage_name {
                out.section(&table.name);
            } else {
                out.section(&format!("{} ({})", table.name, table.storage_name));
            }

            for column in &table.columns {
                let mut line = format!(
                    "{}: {} -> {}",
                    column.name, column.storage_type, column.mapped_type
                );
                if !column.flags.is_empty() {
                    line.push_str(&format!(" [{}]", column.flags.join(", ")));
                }
                out.list_item(&line);
            }
        }
    }
}
