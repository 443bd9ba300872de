use super::join_blocks;
use crate::{
    schema::Table,
    template::{FieldMap, NamedFields, TemplateError, fill_fields, fill_placeholder},
};

/// Renders per-table repositories from the table repository template.
#[derive(Debug, Clone)]
pub struct RepositoryRenderer<'a> {
    template: &'a str,
    frame: &'a str,
    shared: FieldMap,
}

impl<'a> RepositoryRenderer<'a> {
    /// `template` is filled per table; `frame` wraps the result and is
    /// expected to have its configuration fields filled already.
    pub fn new(template: &'a str, frame: &'a str) -> Self {
        Self {
            template,
            frame,
            shared: FieldMap::new(),
        }
    }

    /// Fields available to every table's template alongside the table's own.
    pub fn with_shared_fields(mut self, fields: FieldMap) -> Self {
        self.shared = fields;
        self
    }

    /// The repository class for one table, without the frame.
    ///
    /// Shared and table fields are filled in one pass; a table field wins
    /// over a shared field of the same name.
    pub fn render_body(&self, table: &Table) -> Result<String, TemplateError> {
        let fields = self.shared.clone().merge(table.named_fields());
        fill_fields(self.template, &fields)
    }

    /// The repository class for one table, wrapped in the frame.
    pub fn render(&self, table: &Table) -> Result<String, TemplateError> {
        let body = self.render_body(table)?;
        Ok(fill_placeholder(self.frame, &join_blocks([body])))
    }
}
