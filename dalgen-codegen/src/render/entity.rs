use super::{RenderHooks, RenderedUnit};
use crate::{
    builder::CodeBuilder,
    schema::{Column, Table},
};

/// Renders one entity class per table.
///
/// Classes are indented one level so they sit inside the model frame's
/// namespace block.
#[derive(Debug, Clone, Copy)]
pub struct EntityRenderer<'a> {
    hooks: &'a RenderHooks,
}

impl<'a> EntityRenderer<'a> {
    pub fn new(hooks: &'a RenderHooks) -> Self {
        Self { hooks }
    }

    pub fn render(&self, table: &Table) -> String {
        let class_decoration = (self.hooks.class_decoration)(table);

        CodeBuilder::csharp()
            .indent()
            .each(class_decoration.lines(), |b, line| b.line(line))
            .line(&format!("[Table(Name = \"{}\")]", table.storage_name()))
            .braced(&format!("public partial class {}", table.name()), |b| {
                b.each(table.columns(), |b, column| self.render_column(b, column))
            })
            .build()
    }

    /// Render every table, keyed by table name.
    pub fn render_all(&self, tables: &[Table]) -> RenderedUnit {
        tables
            .iter()
            .map(|table| (table.name().to_string(), self.render(table)))
            .collect()
    }

    fn render_column(&self, builder: CodeBuilder, column: &Column) -> CodeBuilder {
        let decoration = (self.hooks.column_decoration)(column);
        let field_type = (self.hooks.convert_type)(column);

        builder
            .each(decoration.lines(), |b, line| b.line(line))
            .line(&format!(
                "public {} {} {{ get; set; }}",
                field_type,
                column.name()
            ))
    }
}
