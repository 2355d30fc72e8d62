//! Shared rendering of pipeline diagnostics.

use routegen_codegen::{Diagnostic, Severity};

use super::output::Output;

/// Render one diagnostic as `msg (at location)`.
fn render_diagnostic(diag: &Diagnostic, out: &mut dyn Output) {
    let msg = match &diag.location {
        Some(loc) => format!("{} (at {})", diag.message, loc),
        None => diag.message.clone(),
    };
    match diag.severity {
        Severity::Error => out.error(&msg),
        Severity::Warning => out.warning(&msg),
        Severity::Info => out.note(&msg),
    }
}

/// Render every diagnostic; info-level ones only when `verbose`.
pub fn render_diagnostics(diagnostics: &[Diagnostic], verbose: bool, out: &mut dyn Output) {
    for diag in diagnostics {
        if verbose || diag.severity != Severity::Info {
            render_diagnostic(diag, out);
        }
    }
}
