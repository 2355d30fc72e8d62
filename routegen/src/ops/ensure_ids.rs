//! Ensure-ids operation - fills in missing operation ids of one document.

use eyre::{Context, Result};
use routegen_codegen::preprocess::ensure_operation_ids;
use routegen_manifest::SchemaDocument;

use crate::reports::EnsureIdsReport;

/// Execute the ensure-ids operation.
pub fn ensure_ids(mut schema: SchemaDocument) -> Result<EnsureIdsReport> {
    let mut diagnostics = Vec::new();
    let synthesized = ensure_operation_ids(&mut schema.content, &mut diagnostics);
    let content = schema
        .to_json_pretty()
        .wrap_err_with(|| format!("Failed to serialize {}", schema.id))?;

    Ok(EnsureIdsReport {
        content,
        synthesized,
        diagnostics,
        output_path: None,
        verbose: false,
    })
}
