use super::join_blocks;
use crate::{
    builder::CodeBuilder,
    schema::Table,
    template::fill_placeholder,
};

/// Renders the table accessors of the aggregate data context.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextRenderer;

impl ContextRenderer {
    /// The accessor for one table, indented to sit inside the context class.
    pub fn render_member(&self, table: &Table) -> String {
        let name = table.name();
        CodeBuilder::csharp()
            .indent()
            .indent()
            .braced(&format!("public Table<{}> {}", name, name), |b| {
                b.line(&format!("get {{ return this.GetTable<{}>(); }}", name))
            })
            .build()
    }

    /// Every table accessor, in table order.
    pub fn render_members(&self, tables: &[Table]) -> String {
        join_blocks(tables.iter().map(|table| self.render_member(table)))
    }

    /// Fill the context template's placeholder with the table accessors.
    ///
    /// `template` is expected to have its configuration fields filled already.
    pub fn render(&self, template: &str, tables: &[Table]) -> String {
        fill_placeholder(template, &self.render_members(tables))
    }
}
