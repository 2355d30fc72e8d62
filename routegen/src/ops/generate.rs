//! Generate operation - runs the full pipeline over a declaration tree.

use eyre::{Context, Result, eyre};
use routegen_ast::SourceTree;
use routegen_codegen::pipeline::{CompilationContext, Pipeline};
use routegen_manifest::{PluginOption, SchemaDocument};

use crate::reports::GenerateReport;

/// How the rewritten tree is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    /// Printed TypeScript declarations.
    Declarations,
    /// The tree itself, as JSON, for hosts that print it themselves.
    Json,
}

/// Execute the generate operation.
///
/// Runs pre-process, metadata and rewrite over `tree` and renders the
/// result in `format`. Diagnostics are collected, never fatal.
pub fn generate(
    option: PluginOption,
    schemas: Vec<SchemaDocument>,
    tree: SourceTree,
    format: TreeFormat,
) -> Result<GenerateReport> {
    let ctx = CompilationContext::new(Some(option), schemas).with_tree(tree);
    let mut ctx = Pipeline::new().run(ctx).wrap_err("Generation failed")?;

    let tree = ctx
        .take_tree()
        .ok_or_else(|| eyre!("pipeline did not return a declaration tree"))?;
    let content = match format {
        TreeFormat::Declarations => tree.print(),
        TreeFormat::Json => tree
            .to_json_pretty()
            .wrap_err("Failed to serialize declaration tree")?,
    };

    Ok(GenerateReport {
        content,
        operations: ctx.transformer.as_ref().map(|t| t.metadata().len()),
        diagnostics: ctx.diagnostics,
        output_path: None,
        verbose: false,
    })
}
