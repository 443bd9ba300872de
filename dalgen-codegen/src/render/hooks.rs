use dalgen_core::upper_first;

use crate::schema::{Column, Table};

/// Overridable steps of entity rendering.
///
/// Each hook is a plain function so a configuration can be built once and
/// shared by every renderer of a run.
#[derive(Debug, Clone, Copy)]
pub struct RenderHooks {
    /// Field type written for a column
    pub convert_type: fn(&Column) -> String,
    /// Lines written above the entity class; empty for none
    pub class_decoration: fn(&Table) -> String,
    /// Lines written above each field; empty for none
    pub column_decoration: fn(&Column) -> String,
}

impl Default for RenderHooks {
    fn default() -> Self {
        Self {
            convert_type: default_convert_type,
            class_decoration: default_class_decoration,
            column_decoration: default_column_decoration,
        }
    }
}

impl RenderHooks {
    pub fn with_convert_type(mut self, hook: fn(&Column) -> String) -> Self {
        self.convert_type = hook;
        self
    }

    pub fn with_class_decoration(mut self, hook: fn(&Table) -> String) -> Self {
        self.class_decoration = hook;
        self
    }

    pub fn with_column_decoration(mut self, hook: fn(&Column) -> String) -> Self {
        self.column_decoration = hook;
        self
    }
}

/// The column's mapped type.
pub fn default_convert_type(column: &Column) -> String {
    column.mapped_type().to_string()
}

/// No class decoration.
pub fn default_class_decoration(_table: &Table) -> String {
    String::new()
}

/// LINQ to SQL column mapping attribute.
pub fn default_column_decoration(column: &Column) -> String {
    let mut attr = format!("[Column(Name = \"{}\"", column.name());
    if column.is_primary_key() {
        attr.push_str(", IsPrimaryKey = true");
    }
    if column.is_generated() {
        attr.push_str(", IsDbGenerated = true");
    }
    if !column.is_nullable() {
        attr.push_str(", CanBeNull = false");
    }
    if skips_update_check(column) {
        attr.push_str(", UpdateCheck = UpdateCheck.Never");
    }
    attr.push_str(&format!(", DbType = \"{}\")]", db_type(column)));
    attr
}

/// Large text values are never compared during optimistic concurrency checks.
fn skips_update_check(column: &Column) -> bool {
    match column.family() {
        Some(family) if family.is_long_text() => true,
        Some(family) if family.is_variable_character() => column.is_unbounded(),
        _ => false,
    }
}

fn db_type(column: &Column) -> String {
    let base = upper_first(column.storage_type());
    let sized = column
        .family()
        .is_some_and(|family| family.is_variable_character());
    match column.length() {
        Some(length) if sized && length > 0 => format!("{}({})", base, length),
        _ => base,
    }
}
