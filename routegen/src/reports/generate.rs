//! Generate command report data structures.

use std::path::PathBuf;

use routegen_codegen::Diagnostic;

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The rewritten tree, printed or serialized.
    pub content: String,
    /// Diagnostics collected by the pipeline.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of operations in the metadata table; `None` when disabled.
    pub operations: Option<usize>,
    /// Where the content was written; `None` for stdout.
    pub output_path: Option<PathBuf>,
    /// Whether info diagnostics are shown.
    pub verbose: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, self.verbose, out);

        match self.operations {
            Some(count) => out.note(&format!(
                "{} operation{} in metadata table",
                count,
                if count == 1 { "" } else { "s" }
            )),
            None => out.note("plugin disabled, tree left unchanged"),
        }

        match &self.output_path {
            Some(path) => out.preformatted(&format!("✓ wrote {}", path.display())),
            None => out.preformatted(self.content.trim_end_matches('\n')),
        }
    }
}
