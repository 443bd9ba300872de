use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a dalgen.toml file with both raw content and parsed manifest.
pub struct DalgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl DalgenToml {
    /// Open and parse a dalgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_base_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dalgen.toml");
        std::fs::write(
            &path,
            "[project]\nnamespace = \"Shop\"\n\n[catalog]\npath = \"schema.toml\"\n",
        )
        .unwrap();

        let file = DalgenToml::open(&path).unwrap();

        assert_eq!(file.base_dir(), temp.path());
        assert_eq!(file.manifest().project.namespace, "Shop");
        assert!(file.content().contains("[catalog]"));
    }

    #[test]
    fn test_bare_filename_base_dir() {
        let manifest: Manifest = "[project]\nnamespace = \"Shop\"\n[catalog]\npath = \"s.toml\"\n"
            .parse()
            .unwrap();
        let file = DalgenToml {
            path: PathBuf::from("dalgen.toml"),
            content: String::new(),
            manifest,
        };

        assert_eq!(file.base_dir(), Path::new("."));
    }
}
