//! Check operation - option and schema validation.

use eyre::{Context, Result};
use routegen_codegen::pipeline::{
    CompilationContext, Pipeline,
    phases::{EnsureIdsPhase, MetadataPhase},
};
use routegen_manifest::{PluginOption, SchemaDocument};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs pre-process and metadata, without a tree, and reports the resolved
/// configuration and the metadata table.
pub fn check(
    option: PluginOption,
    schemas: Vec<SchemaDocument>,
    options_source: String,
) -> Result<CheckReport> {
    let pipeline = Pipeline::empty().phase(EnsureIdsPhase).phase(MetadataPhase);
    let ctx = pipeline
        .run(CompilationContext::new(Some(option), schemas))
        .wrap_err("Validation failed")?;

    let (config, operations) = match &ctx.transformer {
        Some(transformer) => (
            Some(transformer.config().clone()),
            transformer.metadata().iter().cloned().collect(),
        ),
        None => (None, Vec::new()),
    };

    Ok(CheckReport {
        options_source,
        config,
        operations,
        diagnostics: ctx.diagnostics,
        verbose: false,
    })
}

#[cfg(test)]
mod tests {
    use routegen_manifest::{Format, RawOptions, RouteTypeName};

    use super::*;

    fn schema(src: &str) -> SchemaDocument {
        SchemaDocument::from_str_with_format(src, "api.json", Format::Json).unwrap()
    }

    #[test]
    fn test_check_lists_operations() {
        let options = RawOptions {
            route_type_name: Some(RouteTypeName::Toggle(true)),
            ..RawOptions::default()
        };
        let report = check(
            PluginOption::from(options),
            vec![schema(
                r#"{"paths":{"/pets/{id}":{"get":{"operationId":"showPet"},"delete":{}}}}"#,
            )],
            "defaults".to_string(),
        )
        .unwrap();

        assert!(report.is_valid());
        let config = report.config.as_ref().unwrap();
        assert_eq!(config.route_type_name.as_deref(), Some("Route"));

        let ids: Vec<_> = report
            .operations
            .iter()
            .map(|op| op.operation_id.as_str())
            .collect();
        assert_eq!(ids, vec!["showPet", "deletePetsid"]);
    }

    #[test]
    fn test_check_fails_on_rejected_route_name() {
        let options = RawOptions {
            route_type_name: Some(RouteTypeName::Name("my route".to_string())),
            ..RawOptions::default()
        };
        let report = check(
            PluginOption::from(options),
            vec![schema(r#"{"paths":{"/pets":{"get":{"operationId":"findPets"}}}}"#)],
            "--route-type-name".to_string(),
        )
        .unwrap();

        assert!(!report.is_valid());
        assert!(report.diagnostics[0].severity.is_error());
        assert!(report.diagnostics[0].message.contains("'my route'"));
        assert_eq!(report.config.unwrap().route_type_name, None);
    }

    #[test]
    fn test_check_reports_collisions() {
        let report = check(
            PluginOption::Toggle(true),
            vec![schema(
                r#"{"paths":{"/a":{"get":{"operationId":"listPets"}},"/b":{"get":{"operationId":"ListPets"}}}}"#,
            )],
            "defaults".to_string(),
        )
        .unwrap();

        assert_eq!(report.operations.len(), 1);
        assert!(report.diagnostics.iter().any(|d| d.severity.is_warning()));
    }
}
