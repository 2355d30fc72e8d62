//! Metadata phase - resolves configuration and builds the metadata table.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    plugin::{PluginContext, RoutePlugin},
};

/// Phase that runs the plugin's post-process hook and keeps the resulting
/// transform in the context.
///
/// Leaves `transformer` unset when the plugin is disabled.
pub struct MetadataPhase;

impl Phase for MetadataPhase {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn description(&self) -> &'static str {
        "Resolve configuration and collect operation metadata"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let plugin_ctx = PluginContext::from_documents(ctx.option.clone(), &ctx.schemas);
        ctx.transformer = RoutePlugin::new().post_process(plugin_ctx, &mut ctx.diagnostics);
        Ok(())
    }
}
