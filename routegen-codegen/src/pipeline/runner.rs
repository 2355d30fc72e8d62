//! Pipeline orchestrator.

use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{EnsureIdsPhase, MetadataPhase, RewritePhase},
};

/// The pipeline orchestrator.
///
/// # Example
///
/// ```ignore
/// // Only fill in operation ids
/// let ctx = Pipeline::empty().phase(EnsureIdsPhase).run(ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with every built-in phase:
    /// pre-process, metadata, rewrite.
    pub fn new() -> Self {
        Self::empty()
            .phase(EnsureIdsPhase)
            .phase(MetadataPhase)
            .phase(RewritePhase)
    }

    /// Create a pipeline without phases.
    pub fn empty() -> Self {
        Self { phases: Vec::new() }
    }

    /// Append a phase.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of the phases, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|phase| phase.name()).collect()
    }

    /// `(name, description)` of each phase, in execution order.
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.phases
            .iter()
            .map(|phase| (phase.name(), phase.description()))
            .collect()
    }

    /// Run every phase in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, mut ctx: CompilationContext) -> Result<CompilationContext> {
        for phase in &self.phases {
            phase
                .run(&mut ctx)
                .map_err(|e| e.wrap_err(format!("{} phase failed", phase.name())))?;
        }
        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
