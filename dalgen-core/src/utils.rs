//! Shared string utilities for code generation.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "orders" -> "Orders", "orderLines" -> "OrderLines").
///
/// Blank strings are returned as-is.
pub fn upper_first(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld", "my-app" -> "MyApp")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Make sure text ends with exactly one newline.
pub fn ensure_trailing_newline(s: &str) -> String {
    let mut out = s.trim_end_matches(['\n', '\r']).to_string();
    out.push('\n');
    out
}
