//! Check command report data structures.

use routegen_codegen::{Diagnostic, OperationMetadata};
use routegen_manifest::Config;

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// Report data from option and schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the options came from (a file, or the defaults).
    pub options_source: String,
    /// The resolved configuration; `None` when the plugin is disabled.
    pub config: Option<Config>,
    /// Rows of the metadata table, in table order.
    pub operations: Vec<OperationMetadata>,
    /// Diagnostics collected by the pipeline.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether info diagnostics are shown.
    pub verbose: bool,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, self.verbose, out);

        if !self.is_valid() {
            return;
        }
        if self.has_warnings() {
            out.newline();
        }

        out.preformatted(&format!("✓ options are valid ({})", self.options_source));
        out.newline();

        let Some(config) = &self.config else {
            out.preformatted("  plugin disabled by configuration");
            return;
        };

        out.section("Options");
        out.key_value_indented("placeholderType", config.placeholder.as_str());
        out.key_value_indented(
            "routeTypeName",
            config.route_type_name.as_deref().unwrap_or("(none)"),
        );
        out.key_value_indented("schemaSelection", config.schema_selection.as_str());
        out.newline();

        let count = self.operations.len();
        out.section(&format!(
            "{} operation{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for op in &self.operations {
            out.list_item(&format!(
                "{} {} -> {}",
                op.method.as_str().to_uppercase(),
                op.express_path,
                op.operation_id
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use routegen_manifest::HttpMethod;

    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(config: Option<Config>, diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            options_source: "routegen.toml".to_string(),
            config,
            operations: vec![OperationMetadata::new(
                "deletePet",
                HttpMethod::Delete,
                "/pets/{id}",
            )],
            diagnostics,
            verbose: false,
        }
    }

    #[test]
    fn test_lists_operations() {
        let mut out = RecordingOutput::default();
        report(Some(Config::default()), Vec::new()).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "✓ options are valid (routegen.toml)",
                "",
                "Options:",
                "  placeholderType: unknown",
                "  routeTypeName: (none)",
                "  schemaSelection: merge",
                "",
                "1 operation:",
                "  - DELETE /pets/:id -> deletePet",
            ]
        );
    }

    #[test]
    fn test_disabled() {
        let mut out = RecordingOutput::default();
        report(None, Vec::new()).render(&mut out);
        assert_eq!(out.lines.last().unwrap(), "  plugin disabled by configuration");
    }

    #[test]
    fn test_errors_stop_rendering() {
        let report = report(
            Some(Config::default()),
            vec![Diagnostic::error("config", "'my route' is not a valid type name").at("routeTypeName")],
        );
        assert!(!report.is_valid());

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec!["error: 'my route' is not a valid type name (at routeTypeName)"]
        );
    }
}
