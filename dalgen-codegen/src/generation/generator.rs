use std::path::PathBuf;

use dalgen_core::{CSharpTypeMapper, TypeMapper, WriteResult, ensure_trailing_newline};
use eyre::Result;
use tracing::{debug, info, warn};

use super::{Config, OutputFile, OutputGroup, OutputSink};
use crate::{
    catalog::{SchemaAccessError, SchemaCatalog},
    render::{ContextRenderer, EntityRenderer, RepositoryRenderer, join_blocks},
    schema::{SchemaIntrospector, Table},
    template::{
        FieldMap, NamedFields, TemplateError, TemplateName, TemplateSource, fill_fields,
        fill_placeholder,
    },
};

/// File name of the shared repository artifact.
pub const CONTEXT_REPOSITORY_FILE: &str = "Repository";

/// Result of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Number of introspected tables
    pub tables: usize,
    /// Files written, relative to the output directory
    pub written: Vec<PathBuf>,
    /// Files the sink left alone
    pub skipped: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// The templates of one run.
///
/// Frames, the context and the repository base have their configuration
/// fields filled. The per-table templates are kept raw and filled once per
/// table with configuration and table fields together.
struct LoadedTemplates {
    model_frame: String,
    repository_frame: String,
    model_entity: String,
    table_repository: String,
    data_context: String,
    repository_base: String,
}

/// Drives one generation run: introspect, render, write.
pub struct Generator {
    config: Config,
    mapper: Box<dyn TypeMapper>,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            mapper: Box::new(CSharpTypeMapper),
        }
    }

    pub fn with_type_mapper(mut self, mapper: impl TypeMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn introspect(&self, catalog: &dyn SchemaCatalog) -> Result<Vec<Table>, SchemaAccessError> {
        SchemaIntrospector::new(self.mapper.as_ref()).introspect(catalog)
    }

    /// Render every output file for `tables`, in write order.
    pub fn render(
        &self,
        tables: &[Table],
        templates: &dyn TemplateSource,
    ) -> Result<Vec<OutputFile>, TemplateError> {
        let loaded = self.load_templates(templates)?;
        let entities = EntityRenderer::new(&self.config.hooks).render_all(tables);
        let context = ContextRenderer.render(&loaded.data_context, tables);
        let repositories =
            RepositoryRenderer::new(&loaded.table_repository, &loaded.repository_frame)
                .with_shared_fields(self.config.named_fields());

        let mut files = Vec::new();
        let models = |name: &str, body: &str| {
            OutputFile::new(
                OutputGroup::Models,
                name,
                ensure_trailing_newline(&fill_placeholder(&loaded.model_frame, body)),
            )
        };

        if self.config.multi_file {
            files.push(models(&self.config.context_name, &join_blocks([&context])));

            for table in tables {
                if table.name() == self.config.context_name {
                    warn!(
                        table = table.storage_name(),
                        "table name collides with the data context file"
                    );
                }
                let entity = entities.get(table.name()).map(String::as_str);
                let extension = fill_fields(&loaded.model_entity, &self.table_fields(table))?;
                files.push(models(
                    table.name(),
                    &join_blocks([entity.unwrap_or_default(), extension.as_str()]),
                ));
            }

            files.push(OutputFile::new(
                OutputGroup::Repositories,
                CONTEXT_REPOSITORY_FILE,
                ensure_trailing_newline(&fill_placeholder(
                    &loaded.repository_frame,
                    &join_blocks([&loaded.repository_base]),
                )),
            ));

            for table in tables {
                if table.name() == CONTEXT_REPOSITORY_FILE {
                    warn!(
                        table = table.storage_name(),
                        "table name collides with the shared repository file"
                    );
                }
                files.push(OutputFile::new(
                    OutputGroup::Repositories,
                    table.name(),
                    ensure_trailing_newline(&repositories.render(table)?),
                ));
            }
        } else {
            let mut model_blocks = vec![context];
            let mut repository_blocks = vec![loaded.repository_base.clone()];

            for table in tables {
                if let Some(entity) = entities.get(table.name()) {
                    model_blocks.push(entity.clone());
                }
                model_blocks.push(fill_fields(&loaded.model_entity, &self.table_fields(table))?);
                repository_blocks.push(repositories.render_body(table)?);
            }

            files.push(models(&self.config.context_name, &join_blocks(&model_blocks)));
            files.push(OutputFile::new(
                OutputGroup::Repositories,
                CONTEXT_REPOSITORY_FILE,
                ensure_trailing_newline(&fill_placeholder(
                    &loaded.repository_frame,
                    &join_blocks(&repository_blocks),
                )),
            ));
        }

        for file in &files {
            debug!(group = ?file.group, name = %file.name, bytes = file.content.len(), "rendered file");
        }
        Ok(files)
    }

    /// Introspect the catalog, render every file and hand each to `sink`.
    ///
    /// Catalog and template failures abort before anything is written.
    pub fn run(
        &self,
        catalog: &dyn SchemaCatalog,
        templates: &dyn TemplateSource,
        sink: &mut dyn OutputSink,
    ) -> Result<GenerateReport> {
        let tables = self.introspect(catalog)?;
        let files = self.render(&tables, templates)?;
        let layout = self.config.layout();

        let mut report = GenerateReport {
            tables: tables.len(),
            ..Default::default()
        };
        for file in &files {
            let path = layout.relative_path(file);
            match sink.write(file)? {
                WriteResult::Written => report.written.push(path),
                WriteResult::Skipped => report.skipped.push(path),
            }
        }

        info!(
            tables = report.tables,
            written = report.written.len(),
            skipped = report.skipped.len(),
            multi_file = self.config.multi_file,
            "generation finished"
        );
        Ok(report)
    }

    /// Render every file without writing anything.
    pub fn preview(
        &self,
        catalog: &dyn SchemaCatalog,
        templates: &dyn TemplateSource,
    ) -> Result<Vec<PreviewFile>> {
        let tables = self.introspect(catalog)?;
        let layout = self.config.layout();

        Ok(self
            .render(&tables, templates)?
            .into_iter()
            .map(|file| PreviewFile {
                path: layout.relative_path(&file).display().to_string(),
                content: file.content,
            })
            .collect())
    }

    /// Configuration and table fields for one per-table template pass.
    fn table_fields(&self, table: &Table) -> FieldMap {
        self.config.named_fields().merge(table.named_fields())
    }

    fn load_templates(&self, source: &dyn TemplateSource) -> Result<LoadedTemplates, TemplateError> {
        let load = |name: TemplateName| -> Result<String, TemplateError> {
            let text = source.load(name)?;
            debug!(template = %name, "loaded template");
            Ok(text)
        };
        let configured = |name: TemplateName| fill_fields(&load(name)?, &self.config);

        Ok(LoadedTemplates {
            model_frame: configured(TemplateName::ModelFrame)?,
            repository_frame: configured(TemplateName::RepositoryFrame)?,
            model_entity: load(TemplateName::ModelEntity)?,
            table_repository: load(TemplateName::TableRepository)?,
            data_context: configured(TemplateName::DataContext)?,
            repository_base: configured(TemplateName::RepositoryBase)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generation::MemoryOutput,
        template::BuiltinTemplates,
        testing::orders_catalog,
    };

    /// Minimal templates that make the layout of each file easy to read.
    struct TinyTemplates;

    impl TemplateSource for TinyTemplates {
        fn load(&self, name: TemplateName) -> Result<String, TemplateError> {
            let text = match name {
                TemplateName::ModelFrame => "namespace [BaseNamespace].[ModelNamespace]\n{\n//[Placeholder]\n}\n",
                TemplateName::RepositoryFrame => "namespace [BaseNamespace].[RepositoryNamespace]\n{\n//[Placeholder]\n}\n",
                TemplateName::ModelEntity => "    // entity [TableName]\n",
                TemplateName::TableRepository => "    // repository [TableName]\n",
                TemplateName::DataContext => "    // context [ContextName]\n//[Placeholder]\n",
                TemplateName::RepositoryBase => "    // base [ContextName]\n",
            };
            Ok(text.to_string())
        }
    }

    fn config() -> Config {
        Config::new("Shop").with_context("ShopContext", "\"Shop\"")
    }

    fn file_names(files: &[OutputFile]) -> Vec<(OutputGroup, &str)> {
        files.iter().map(|f| (f.group, f.name.as_str())).collect()
    }

    #[test]
    fn test_single_file_layout() {
        let generator = Generator::new(config());
        let tables = generator.introspect(&orders_catalog()).unwrap();

        let files = generator.render(&tables, &TinyTemplates).unwrap();

        assert_eq!(
            file_names(&files),
            [
                (OutputGroup::Models, "ShopContext"),
                (OutputGroup::Repositories, "Repository"),
            ]
        );
        assert_eq!(
            files[1].content,
            "namespace Shop.Repositories\n{\n    // base ShopContext\n\n    // repository Orders\n}\n"
        );
        assert!(files[0].content.starts_with("namespace Shop.Models\n{\n    // context ShopContext\n"));
        assert!(files[0].content.contains("    public partial class Orders\n"));
        assert!(files[0].content.ends_with("    }\n\n    // entity Orders\n}\n"));
    }

    #[test]
    fn test_multi_file_layout() {
        let generator = Generator::new(config().with_multi_file(true));
        let tables = generator.introspect(&orders_catalog()).unwrap();

        let files = generator.render(&tables, &TinyTemplates).unwrap();

        assert_eq!(
            file_names(&files),
            [
                (OutputGroup::Models, "ShopContext"),
                (OutputGroup::Models, "Orders"),
                (OutputGroup::Repositories, "Repository"),
                (OutputGroup::Repositories, "Orders"),
            ]
        );
        assert!(!files[0].content.contains("partial class Orders"));
        assert!(files[1].content.contains("    public partial class Orders\n"));
        assert_eq!(
            files[3].content,
            "namespace Shop.Repositories\n{\n    // repository Orders\n}\n"
        );
    }

    #[test]
    fn test_missing_connection_fails() {
        let generator = Generator::new(Config::new("Shop"));
        let tables = generator.introspect(&orders_catalog()).unwrap();

        let err = generator.render(&tables, &BuiltinTemplates).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::MissingFieldValue { ref field } if field == "ContextConnection"
        ));
    }

    #[test]
    fn test_per_table_templates_filled_in_one_pass() {
        struct ConnectionTemplates;

        impl TemplateSource for ConnectionTemplates {
            fn load(&self, name: TemplateName) -> Result<String, TemplateError> {
                match name {
                    TemplateName::ModelEntity => {
                        Ok("    // [TableName] via [ContextConnection]\n".to_string())
                    }
                    TemplateName::TableRepository => {
                        Ok("    // [ContextName] for [TableName]\n".to_string())
                    }
                    other => TinyTemplates.load(other),
                }
            }
        }

        let generator = Generator::new(
            Config::new("Shop")
                .with_context("ShopContext", "\"[TableName]\"")
                .with_multi_file(true),
        );
        let tables = generator.introspect(&orders_catalog()).unwrap();

        let files = generator.render(&tables, &ConnectionTemplates).unwrap();

        assert!(files[1].content.contains("    // Orders via \"[TableName]\"\n"));
        assert_eq!(
            files[3].content,
            "namespace Shop.Repositories\n{\n    // ShopContext for Orders\n}\n"
        );
    }

    #[test]
    fn test_run_reports_paths() {
        let generator = Generator::new(config());
        let mut sink = MemoryOutput::new();

        let report = generator
            .run(&orders_catalog(), &BuiltinTemplates, &mut sink)
            .unwrap();

        assert_eq!(report.tables, 1);
        assert_eq!(
            report.written,
            [
                PathBuf::from("Models/ShopContext.cs"),
                PathBuf::from("Repositories/Repository.cs"),
            ]
        );
        assert!(report.skipped.is_empty());
        assert_eq!(sink.files().len(), 2);
    }

    #[test]
    fn test_preview_paths() {
        let generator = Generator::new(config().with_multi_file(true));

        let preview = generator.preview(&orders_catalog(), &BuiltinTemplates).unwrap();

        let paths: Vec<_> = preview.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "Models/ShopContext.cs",
                "Models/Orders.cs",
                "Repositories/Repository.cs",
                "Repositories/Orders.cs",
            ]
        );
    }

    #[test]
    fn test_custom_type_mapper() {
        struct Verbatim;

        impl TypeMapper for Verbatim {
            fn language(&self) -> &'static str {
                "verbatim"
            }

            fn map_family(&self, _family: dalgen_core::StorageFamily) -> &'static str {
                "object"
            }
        }

        let generator = Generator::new(config()).with_type_mapper(Verbatim);
        let tables = generator.introspect(&orders_catalog()).unwrap();

        assert_eq!(tables[0].columns()[0].mapped_type(), "object");
        assert_eq!(tables[0].columns()[1].mapped_type(), "object");
    }
}
