use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for routegen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so every parse error can
/// point back into the file it came from.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_col_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a YAML error.
    pub fn yaml_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 0)));
        Box::new(Error::Yaml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid option error, pointing at `key` when it can be found.
    pub fn invalid_option(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        let span = self
            .src
            .find(key)
            .map(|offset| SourceSpan::from((offset, key.len())));
        Box::new(Error::InvalidOption {
            src: self.named_source(),
            span,
            key: key.to_string(),
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line / column pair.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(routegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON document")]
    #[diagnostic(code(routegen::json))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML document")]
    #[diagnostic(code(routegen::yaml))]
    Yaml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse routegen.toml")]
    #[diagnostic(code(routegen::toml))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid option '{key}': {message}")]
    #[diagnostic(
        code(routegen::invalid_option),
        help(
            "routeTypeName must be a TypeScript identifier other than Config or RequestHandler, or false to disable"
        )
    )]
    InvalidOption {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        key: String,
        message: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_offset() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(line_col_offset(src, 1, 1), Some(0));
        assert_eq!(line_col_offset(src, 3, 3), Some(14));
        assert_eq!(line_col_offset(src, 0, 0), None);
    }

    #[test]
    fn test_json_error_has_span() {
        let ctx = SourceContext::new("{ \"paths\": ", "openapi.json");
        let err = serde_json::from_str::<serde_json::Value>(ctx.src()).unwrap_err();
        match *ctx.json_error(err) {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_option_points_at_key() {
        let ctx = SourceContext::new("routeTypeName = \"my route\"\n", "routegen.toml");
        match *ctx.invalid_option("routeTypeName", "not an identifier") {
            Error::InvalidOption { span, key, .. } => {
                assert_eq!(key, "routeTypeName");
                assert_eq!(span, Some(SourceSpan::from((0, 13))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
