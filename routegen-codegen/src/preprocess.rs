//! Pre-process hook: make sure every operation has an `operationId`.

use std::sync::LazyLock;

use regex_lite::Regex;
use routegen_manifest::{HttpMethod, OpenApiDocument, SchemaDocument};

use crate::pipeline::Diagnostic;

const PHASE: &str = "pre-process";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// The id given to an operation that has none:
/// `<method><Capitalized path without non-word characters>`.
///
/// `get /pets/{id}` becomes `getPetsid`.
pub fn synthesize_operation_id(method: HttpMethod, path: &str) -> String {
    let stripped = NON_WORD.replace_all(path, "");
    let mut chars = stripped.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{}{}", method, capitalized)
}

/// Fill in missing operation ids of one document, in place.
///
/// Returns the number of ids synthesized.
pub fn ensure_operation_ids(
    document: &mut OpenApiDocument,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    let mut synthesized = 0;
    for (path, item) in document.paths.iter_mut() {
        for (method, operation) in item.operations_mut() {
            if operation.operation_id().is_some() {
                continue;
            }
            let operation_id = synthesize_operation_id(method, path);
            diagnostics.push(
                Diagnostic::info(
                    PHASE,
                    format!("synthesized operationId '{}'", operation_id),
                )
                .at(format!("{} {}", method, path)),
            );
            operation.set_operation_id(operation_id);
            synthesized += 1;
        }
    }
    synthesized
}

/// Fill in missing operation ids of every document.
pub fn ensure_all_operation_ids(
    mut schemas: Vec<SchemaDocument>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<SchemaDocument> {
    for schema in &mut schemas {
        ensure_operation_ids(&mut schema.content, diagnostics);
    }
    schemas
}
