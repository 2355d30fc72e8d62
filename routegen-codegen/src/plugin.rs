//! The plugin surface a generator host drives.
//!
//! The host calls [`RoutePlugin::pre_process`] with its schema documents
//! before generating declarations, then [`RoutePlugin::post_process`] with a
//! [`PluginContext`] and applies the returned [`RouteTransformer`] to the
//! generated tree.

use std::fmt;

use routegen_ast::SourceTree;
use routegen_manifest::{Config, InputSchema, PluginOption, SchemaDocument};

use crate::{
    metadata::MetadataTable, pipeline::Diagnostic, preprocess::ensure_all_operation_ids,
    transform::RouteTransformer,
};

/// Name, version and description of the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl PluginMeta {
    /// Metadata of this crate.
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }
}

impl fmt::Display for PluginMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Values yielded by the host's input schema iterator: a key plus the schema.
pub type SchemaEntry = (String, InputSchema);

/// What the host hands to the post-process hook.
pub struct PluginContext<'a> {
    /// The raw `option` value; `None` when the host has no entry for the plugin.
    pub option: Option<PluginOption>,
    pub input_schemas: Box<dyn Iterator<Item = SchemaEntry> + 'a>,
}

impl<'a> PluginContext<'a> {
    pub fn new<I>(option: Option<PluginOption>, input_schemas: I) -> Self
    where
        I: IntoIterator<Item = SchemaEntry>,
        I::IntoIter: 'a,
    {
        Self {
            option,
            input_schemas: Box::new(input_schemas.into_iter()),
        }
    }

    /// A context whose schema iterator walks the given documents, keyed by id.
    pub fn from_documents(option: Option<PluginOption>, documents: &'a [SchemaDocument]) -> Self {
        Self::new(
            option,
            documents
                .iter()
                .map(|doc| (doc.id.clone(), InputSchema::new(doc.clone()))),
        )
    }
}

impl fmt::Debug for PluginContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContext")
            .field("option", &self.option)
            .finish_non_exhaustive()
    }
}

/// The route plugin: fills in operation ids, then synthesizes per-path
/// `Config` descriptors and route-handler aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutePlugin;

impl RoutePlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn meta(&self) -> PluginMeta {
        PluginMeta::current()
    }

    /// Give every operation of every document an `operationId`.
    pub fn pre_process(
        &self,
        schemas: Vec<SchemaDocument>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<SchemaDocument> {
        ensure_all_operation_ids(schemas, diagnostics)
    }

    /// Resolve the configuration and build the metadata table.
    ///
    /// Returns `None` when the plugin is disabled; the host then leaves its
    /// tree as generated. A rejected `routeTypeName` is reported as an error
    /// and the alias is left out.
    pub fn post_process(
        &self,
        ctx: PluginContext<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<RouteTransformer> {
        if let Some(Err(message)) = ctx.option.as_ref().map(PluginOption::validate) {
            diagnostics.push(
                Diagnostic::error(
                    "config",
                    format!("{}; route alias not emitted", message),
                )
                .at("routeTypeName"),
            );
        }
        let Some(config) = Config::from_option(ctx.option.as_ref()) else {
            diagnostics.push(Diagnostic::info("config", "plugin disabled by configuration"));
            return None;
        };
        let metadata =
            MetadataTable::from_schemas(ctx.input_schemas, config.schema_selection, diagnostics);
        Some(RouteTransformer::new(config, metadata))
    }

    /// Run the post-process hook and apply its transform, passing the tree
    /// through unchanged when the plugin is disabled.
    pub fn transform(
        &self,
        ctx: PluginContext<'_>,
        tree: SourceTree,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> SourceTree {
        match self.post_process(ctx, diagnostics) {
            Some(transformer) => transformer.transform(tree, diagnostics),
            None => tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use routegen_ast::{InterfaceDecl, NamespaceDecl};
    use routegen_manifest::{Format, PlaceholderType, RawOptions};

    use super::*;

    fn documents() -> Vec<SchemaDocument> {
        vec![
            SchemaDocument::from_str_with_format(
                r#"{"paths":{"/pets":{"get":{"operationId":"findPets"}}}}"#,
                "pets.json",
                Format::Json,
            )
            .unwrap(),
        ]
    }

    fn tree() -> SourceTree {
        SourceTree::new(vec![
            NamespaceDecl::new("Paths")
                .declare()
                .statement(
                    NamespaceDecl::new("FindPets")
                        .statement(InterfaceDecl::new("QueryParameters").exported()),
                )
                .into(),
        ])
    }

    #[test]
    fn test_meta() {
        let meta = RoutePlugin::new().meta();
        assert_eq!(meta.name, "routegen-codegen");
        assert!(meta.to_string().starts_with("routegen-codegen "));
    }

    #[test]
    fn test_disabled_plugin_passes_tree_through() {
        let docs = documents();
        for option in [None, Some(PluginOption::Toggle(false))] {
            let mut diagnostics = Vec::new();
            let ctx = PluginContext::from_documents(option, &docs);
            let output = RoutePlugin::new().transform(ctx, tree(), &mut diagnostics);
            assert_eq!(output, tree());
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].phase, "config");
        }
    }

    #[test]
    fn test_enabled_plugin_builds_metadata() {
        let docs = documents();
        let ctx = PluginContext::from_documents(Some(PluginOption::Toggle(true)), &docs);
        let transformer = RoutePlugin::new()
            .post_process(ctx, &mut Vec::new())
            .unwrap();

        assert_eq!(transformer.config().placeholder, PlaceholderType::Unknown);
        assert_eq!(transformer.metadata().len(), 1);
        assert!(transformer.metadata().lookup("FindPets").is_some());
    }

    #[test]
    fn test_route_alias_adds_import() {
        let docs = documents();
        let option = PluginOption::Options(RawOptions {
            route_type_name: Some(routegen_manifest::RouteTypeName::Name("Route".into())),
            ..RawOptions::default()
        });
        let ctx = PluginContext::from_documents(Some(option), &docs);
        let output = RoutePlugin::new().transform(ctx, tree(), &mut Vec::new());
        assert!(
            output
                .print()
                .starts_with("import { RequestHandler } from \"express\";\n")
        );
    }

    #[test]
    fn test_invalid_route_name_is_reported_and_skipped() {
        let docs = documents();
        for name in ["my route", "Config"] {
            let option: PluginOption =
                serde_json::from_value(serde_json::json!({ "routeTypeName": name })).unwrap();
            let ctx = PluginContext::from_documents(Some(option), &docs);
            let mut diagnostics = Vec::new();
            let output = RoutePlugin::new().transform(ctx, tree(), &mut diagnostics);

            assert_eq!(diagnostics.len(), 1);
            assert!(diagnostics[0].severity.is_error());
            assert_eq!(diagnostics[0].location.as_deref(), Some("routeTypeName"));

            let printed = output.print();
            assert!(!printed.contains("import"));
            assert!(!printed.contains(&format!("type {}", name)));
            assert!(printed.contains("interface Config {"));
        }
    }

    #[test]
    fn test_pre_process_then_post_process() {
        let docs = vec![
            SchemaDocument::from_str_with_format(
                r#"{"paths":{"/pets":{"get":{}}}}"#,
                "pets.json",
                Format::Json,
            )
            .unwrap(),
        ];
        let plugin = RoutePlugin::new();
        let mut diagnostics = Vec::new();
        let docs = plugin.pre_process(docs, &mut diagnostics);

        let ctx = PluginContext::from_documents(Some(PluginOption::Toggle(true)), &docs);
        let transformer = plugin.post_process(ctx, &mut diagnostics).unwrap();
        assert!(transformer.metadata().lookup("getPets").is_some());
    }
}
