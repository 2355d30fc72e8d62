//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the route pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads and
/// modifies the compilation context.
///
/// Built-in phases:
/// - `EnsureIdsPhase` - fills in missing operation ids
/// - `MetadataPhase` - resolves configuration and the metadata table
/// - `RewritePhase` - rewrites the declaration tree
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
