//! Validation utilities for C# identifiers and manifest values

use miette::SourceSpan;

/// C# reserved keywords that cannot be used as bare identifiers
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Find the span of a string value in the TOML source.
///
/// Looks for the value in double or single quotes and points at the
/// characters between them.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [format!("\"{}\"", value), format!("'{}'", value)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    None
}

/// Validate that a name is a valid C# identifier.
/// Returns None if valid, Some(reason) if invalid
///
/// Keywords are checked separately so they can get a dedicated error.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate that a folder name is a single, non-empty path segment.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_folder(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("folder name cannot be empty");
    }
    if name.contains(['/', '\\']) {
        return Some("folder name must be a single path segment");
    }
    if name == "." || name == ".." {
        return Some("folder name must not be a relative directory marker");
    }
    None
}

/// Validate a file extension (without the leading dot).
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_extension(ext: &str) -> Option<&'static str> {
    if ext.is_empty() {
        return Some("extension cannot be empty");
    }
    if ext.starts_with('.') {
        return Some("extension must not start with a dot");
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("extension must contain only letters and numbers");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Orders").is_none());
        assert!(validate_identifier("ModelContext").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("Shop2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("my-context").is_some());
        assert!(validate_identifier("Data Access").is_some());
        assert!(validate_identifier("Shop.Data").is_some());
    }

    #[test]
    fn test_is_csharp_keyword() {
        assert!(is_csharp_keyword("class"));
        assert!(is_csharp_keyword("namespace"));
        assert!(is_csharp_keyword("string"));
        assert!(!is_csharp_keyword("Class"));
        assert!(!is_csharp_keyword("Models"));
    }

    #[test]
    fn test_validate_folder() {
        assert!(validate_folder("Models").is_none());
        assert!(validate_folder("Data Models").is_none());
        assert!(validate_folder("").is_some());
        assert!(validate_folder("  ").is_some());
        assert!(validate_folder("a/b").is_some());
        assert!(validate_folder("a\\b").is_some());
        assert!(validate_folder("..").is_some());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("cs").is_none());
        assert!(validate_extension("").is_some());
        assert!(validate_extension(".cs").is_some());
        assert!(validate_extension("c#").is_some());
    }

    #[test]
    fn test_find_value_span() {
        let src = r#"[context]
name = "class""#;
        let span = find_value_span(src, "class").unwrap();
        assert_eq!(span.offset(), 18);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_value_span_single_quotes() {
        let src = "namespace = 'Shop.1Data'";
        let span = find_value_span(src, "Shop.1Data").unwrap();
        assert_eq!(span.offset(), 13);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("name = \"Other\"", "Orders").is_none());
    }
}
