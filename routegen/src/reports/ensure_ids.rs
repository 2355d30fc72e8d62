//! Ensure-ids command report data structures.

use std::path::PathBuf;

use routegen_codegen::Diagnostic;

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// Report data from filling in operation ids of one document.
#[derive(Debug)]
pub struct EnsureIdsReport {
    /// The completed document, as pretty JSON.
    pub content: String,
    /// Number of operation ids synthesized.
    pub synthesized: usize,
    /// One info diagnostic per synthesized id.
    pub diagnostics: Vec<Diagnostic>,
    /// Where the document was written; `None` for stdout.
    pub output_path: Option<PathBuf>,
    /// Whether every synthesized id is listed.
    pub verbose: bool,
}

impl Report for EnsureIdsReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, self.verbose, out);
        out.note(&format!(
            "synthesized {} operationId{}",
            self.synthesized,
            if self.synthesized == 1 { "" } else { "s" }
        ));

        match &self.output_path {
            Some(path) => out.preformatted(&format!("✓ wrote {}", path.display())),
            None => out.preformatted(&self.content),
        }
    }
}
