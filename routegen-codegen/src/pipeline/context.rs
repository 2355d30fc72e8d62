//! Compilation context passed through pipeline phases.

use routegen_ast::SourceTree;
use routegen_manifest::{PluginOption, SchemaDocument};

use super::diagnostic::{Diagnostic, Severity};
use crate::transform::RouteTransformer;

/// Context passed through all pipeline phases.
///
/// Carries the inputs of one generation run and accumulates results and
/// diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The host's `option` value for the plugin.
    pub option: Option<PluginOption>,
    /// Input schema documents (mutated by the pre-process phase).
    pub schemas: Vec<SchemaDocument>,
    /// The declaration tree to rewrite, if any.
    pub tree: Option<SourceTree>,
    /// The transform (populated by MetadataPhase; stays `None` when disabled).
    pub transformer: Option<RouteTransformer>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(option: Option<PluginOption>, schemas: Vec<SchemaDocument>) -> Self {
        Self {
            option,
            schemas,
            tree: None,
            transformer: None,
            diagnostics: Vec::new(),
        }
    }

    /// Attach the declaration tree to rewrite.
    pub fn with_tree(mut self, tree: SourceTree) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the tree out of the context.
    pub fn take_tree(&mut self) -> Option<SourceTree> {
        self.tree.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(None, Vec::new());
        assert!(ctx.tree.is_none());
        assert!(ctx.transformer.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(None, Vec::new());
        ctx.add_diagnostic(Diagnostic::warning("metadata", "missing operationId"));
        ctx.add_diagnostic(Diagnostic::info("pre-process", "synthesized operationId"));

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}
