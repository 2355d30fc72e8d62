//! Pre-process phase - fills in missing operation ids.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    plugin::RoutePlugin,
};

/// Phase that runs the plugin's pre-process hook over the input schemas.
pub struct EnsureIdsPhase;

impl Phase for EnsureIdsPhase {
    fn name(&self) -> &'static str {
        "pre-process"
    }

    fn description(&self) -> &'static str {
        "Synthesize missing operation ids"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let schemas = std::mem::take(&mut ctx.schemas);
        ctx.schemas = RoutePlugin::new().pre_process(schemas, &mut ctx.diagnostics);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use routegen_manifest::{Format, HttpMethod, Operation, SchemaDocument};

    use super::*;

    #[test]
    fn test_ids_filled_in() {
        let schema = SchemaDocument::from_str_with_format(
            r#"{"paths":{"/pets/{id}":{"get":{}}}}"#,
            "pets.json",
            Format::Json,
        )
        .unwrap();
        let mut ctx = CompilationContext::new(None, vec![schema]);
        EnsureIdsPhase.run(&mut ctx).unwrap();

        let id = ctx.schemas[0].content.paths["/pets/{id}"]
            .operation(HttpMethod::Get)
            .and_then(Operation::operation_id);
        assert_eq!(id, Some("getPetsid"));
        assert_eq!(ctx.diagnostics.len(), 1);
    }
}
