//! Validation context for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{
    Result,
    error::SourceContext,
    validate::{
        find_value_span, is_csharp_keyword, validate_extension, validate_folder,
        validate_identifier,
    },
};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content and the section currently being
/// validated, so errors can name where a value came from and point at it.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "dalgen.toml");
/// ctx.push("context").validate_name("ModelContext", "context name")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Section path (e.g., ["models"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "namespace in 'models'" or just "namespace" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate that a name is a usable C# identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted namespace; every segment must be a valid name.
    pub fn validate_namespace(&self, namespace: &str, kind: &str) -> Result<()> {
        for segment in namespace.split('.') {
            if is_csharp_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    self.context_for(kind),
                    self.find_span(namespace),
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    namespace,
                    self.context_for(kind),
                    reason,
                    self.find_span(namespace),
                ));
            }
        }
        Ok(())
    }

    /// Validate an output folder name.
    pub fn validate_folder(&self, folder: &str) -> Result<()> {
        match validate_folder(folder) {
            Some(reason) => Err(self.source.validation_error(
                format!("{} ({})", reason, self.context_for("folder")),
                self.find_span(folder),
            )),
            None => Ok(()),
        }
    }

    /// Validate an output file extension.
    pub fn validate_extension(&self, ext: &str) -> Result<()> {
        match validate_extension(ext) {
            Some(reason) => Err(self
                .source
                .validation_error(reason, self.find_span(ext))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "dalgen.toml");
        assert_eq!(ctx.context_for("namespace"), "namespace");
        assert_eq!(
            ctx.push("models").context_for("namespace"),
            "namespace in 'models'"
        );
    }

    #[test]
    fn test_validate_namespace_segments() {
        let src = r#"namespace = "Shop.class.Data""#;
        let ctx = ParseContext::new(src, "dalgen.toml");

        assert!(ctx.validate_namespace("Shop.Data", "namespace").is_ok());

        let err = ctx
            .validate_namespace("Shop.class.Data", "namespace")
            .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "class"));
    }

    #[test]
    fn test_validate_namespace_empty_segment() {
        let ctx = ParseContext::new("", "dalgen.toml");
        let err = ctx.validate_namespace("Shop..Data", "namespace").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_validate_folder_error_is_located() {
        let src = r#"folder = "a/b""#;
        let ctx = ParseContext::new(src, "dalgen.toml").push("models");
        let err = ctx.validate_folder("a/b").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(span.map(|s| s.offset()), Some(10));
                assert!(message.contains("'models'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
