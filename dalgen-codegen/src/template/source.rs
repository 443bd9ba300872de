use std::{
    fmt,
    path::{Path, PathBuf},
};

use super::TemplateError;

/// The templates a generation run loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    /// File frame around entity classes and the data context
    ModelFrame,
    /// File frame around repository classes
    RepositoryFrame,
    /// Per-table addition to the entity class
    ModelEntity,
    /// Per-table repository class
    TableRepository,
    /// The aggregate data context class
    DataContext,
    /// The generic repository every table repository builds on
    RepositoryBase,
}

impl TemplateName {
    pub const ALL: [Self; 6] = [
        Self::ModelFrame,
        Self::RepositoryFrame,
        Self::ModelEntity,
        Self::TableRepository,
        Self::DataContext,
        Self::RepositoryBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelFrame => "ModelFrame",
            Self::RepositoryFrame => "RepositoryFrame",
            Self::ModelEntity => "ModelEntity",
            Self::TableRepository => "TableRepository",
            Self::DataContext => "DataContext",
            Self::RepositoryBase => "RepositoryBase",
        }
    }

    /// File name inside a template directory.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }

    /// The default template text shipped with dalgen.
    pub fn builtin(&self) -> &'static str {
        match self {
            Self::ModelFrame => include_str!("../../assets/templates/ModelFrame.txt"),
            Self::RepositoryFrame => include_str!("../../assets/templates/RepositoryFrame.txt"),
            Self::ModelEntity => include_str!("../../assets/templates/ModelEntity.txt"),
            Self::TableRepository => include_str!("../../assets/templates/TableRepository.txt"),
            Self::DataContext => include_str!("../../assets/templates/DataContext.txt"),
            Self::RepositoryBase => include_str!("../../assets/templates/RepositoryBase.txt"),
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where template text comes from.
pub trait TemplateSource {
    fn load(&self, name: TemplateName) -> Result<String, TemplateError>;
}

/// Templates read from `<dir>/<Name>.txt`.
#[derive(Debug, Clone)]
pub struct DirTemplateSource {
    dir: PathBuf,
}

impl DirTemplateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: TemplateName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

impl TemplateSource for DirTemplateSource {
    fn load(&self, name: TemplateName) -> Result<String, TemplateError> {
        let path = self.path_for(name);
        std::fs::read_to_string(&path).map_err(|source| TemplateError::Read {
            name,
            path,
            source,
        })
    }
}

/// The templates embedded in the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateSource for BuiltinTemplates {
    fn load(&self, name: TemplateName) -> Result<String, TemplateError> {
        Ok(name.builtin().to_string())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::template::placeholder_name;

    #[test]
    fn test_frames_have_placeholder() {
        let sentinel = placeholder_name(crate::template::PLACEHOLDER);
        for name in [
            TemplateName::ModelFrame,
            TemplateName::RepositoryFrame,
            TemplateName::DataContext,
        ] {
            assert!(
                name.builtin().contains(&sentinel),
                "{} has no placeholder",
                name
            );
        }
    }

    #[test]
    fn test_dir_source_reads_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("ModelEntity.txt"), "partial [TableName]").unwrap();

        let source = DirTemplateSource::new(temp.path());
        assert_eq!(
            source.load(TemplateName::ModelEntity).unwrap(),
            "partial [TableName]"
        );

        let err = source.load(TemplateName::DataContext).unwrap_err();
        match err {
            TemplateError::Read { name, path, .. } => {
                assert_eq!(name, TemplateName::DataContext);
                assert_eq!(path, temp.path().join("DataContext.txt"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_builtin_source() {
        for name in TemplateName::ALL {
            assert_eq!(BuiltinTemplates.load(name).unwrap(), name.builtin());
        }
    }
}
