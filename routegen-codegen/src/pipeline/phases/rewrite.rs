//! Rewrite phase - applies the transform to the declaration tree.

use eyre::{Result, eyre};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that rewrites the context's tree with the transform built by
/// `MetadataPhase`.
///
/// A disabled plugin leaves the tree as it is.
pub struct RewritePhase;

impl Phase for RewritePhase {
    fn name(&self) -> &'static str {
        "rewrite"
    }

    fn description(&self) -> &'static str {
        "Append route descriptors to path declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let tree = ctx
            .tree
            .take()
            .ok_or_else(|| eyre!("no declaration tree to rewrite"))?;

        let tree = match &ctx.transformer {
            Some(transformer) => transformer.transform(tree, &mut ctx.diagnostics),
            None => tree,
        };
        ctx.tree = Some(tree);
        Ok(())
    }
}
