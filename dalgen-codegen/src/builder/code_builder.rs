//! Code builder utility for generating properly indented code.

/// One indentation level (C# uses four spaces).
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use dalgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .line("public partial class Orders")
///     .line("{")
///     .indent()
///     .line("public int id { get; set; }")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(
///     code,
///     "public partial class Orders\n{\n    public int id { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn csharp() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    ///
    /// Empty lines are written without trailing indentation.
    pub fn line(mut self, s: &str) -> Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a brace-delimited block: header, `{`, indented body, `}`.
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).line("{").indent();
        f(builder).dedent().line("}")
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
