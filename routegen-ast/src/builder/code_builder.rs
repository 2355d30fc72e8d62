//! Code builder utility for printing properly indented declarations.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use routegen_ast::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::declaration();
/// builder
///     .push_line("declare namespace Paths {")
///     .push_indent()
///     .push_line("type A = string;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "declare namespace Paths {\n    type A = string;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn declaration() -> Self {
        Self::new(Indent::DECLARATION)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::declaration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::declaration();
        builder.push_line("type A = string;");
        assert_eq!(builder.build(), "type A = string;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::declaration();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.apply_fragment(CodeFragment::block(
            "namespace A {",
            vec![CodeFragment::block(
                "interface B {",
                vec![CodeFragment::line("x: number;")],
                Some("}".to_string()),
            )],
            Some("}".to_string()),
        ));

        assert_eq!(
            builder.build(),
            "namespace A {\n  interface B {\n    x: number;\n  }\n}\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::declaration();
        builder.apply_fragment(CodeFragment::block(
            "header",
            vec![CodeFragment::line("body")],
            None,
        ));
        assert_eq!(builder.build(), "header\n    body\n");
    }
}
