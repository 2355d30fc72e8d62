//! Schema envelopes the host hands to the plugin hooks.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{OpenApiDocument, Paths, Result, SourceContext, error::Error};

/// Source format of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// One input schema document, as passed to the pre-process hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Where the document came from (file path or URL).
    pub id: String,
    pub content: OpenApiDocument,
}

impl SchemaDocument {
    pub fn new(id: impl Into<String>, content: OpenApiDocument) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Load a JSON or YAML OpenAPI document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let id = path.display().to_string();
        Self::from_str_with_format(&src, &id, Format::from_path(path))
    }

    /// Parse a document from a string.
    pub fn from_str_with_format(src: &str, id: &str, format: Format) -> Result<Self> {
        let ctx = SourceContext::new(src, id);
        let content = match format {
            Format::Json => serde_json::from_str(src).map_err(|e| ctx.json_error(e))?,
            Format::Yaml => serde_yaml::from_str(src).map_err(|e| ctx.yaml_error(e))?,
        };
        Ok(Self::new(id, content))
    }

    /// Serialize the document content back to pretty JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.content)
    }
}

/// A value yielded by the host's input schema iterator.
///
/// The root schema may be missing (the host multiplexes non-OpenAPI inputs
/// through the same iterator).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    pub root_schema: Option<SchemaDocument>,
}

impl InputSchema {
    pub fn new(root_schema: SchemaDocument) -> Self {
        Self {
            root_schema: Some(root_schema),
        }
    }

    /// The `paths` map of the root schema, when present and non-empty.
    pub fn paths(&self) -> Option<&Paths> {
        self.root_schema
            .as_ref()
            .map(|schema| &schema.content.paths)
            .filter(|paths| !paths.is_empty())
    }
}

impl From<SchemaDocument> for InputSchema {
    fn from(value: SchemaDocument) -> Self {
        Self::new(value)
    }
}
