//! Rewriting of a single path declaration.

use routegen_ast::{
    InterfaceDecl, NamespaceDecl, PropertySignature, Statement, TypeAliasDecl, TypeExpr,
};
use routegen_manifest::{Config, DESCRIPTOR_NAME, REQUEST_HANDLER};

use crate::{
    metadata::{MetadataTable, OperationMetadata},
    pipeline::Diagnostic,
    resolve::{RouteTypes, TypeResolver},
};

const PHASE: &str = "rewrite";

/// Appends a `Config` descriptor (and optionally a route-handler alias) to
/// path declarations of one paths container.
#[derive(Debug, Clone, Copy)]
pub struct PathRewriter<'a> {
    container: &'a str,
    metadata: &'a MetadataTable,
    config: &'a Config,
}

impl<'a> PathRewriter<'a> {
    pub fn new(container: &'a str, metadata: &'a MetadataTable, config: &'a Config) -> Self {
        Self {
            container,
            metadata,
            config,
        }
    }

    /// Rewrite one path declaration.
    ///
    /// Paths without a body, with an empty body, or without operation
    /// metadata come back unchanged. Otherwise the synthesized declarations
    /// are appended after the existing body statements.
    pub fn rewrite(
        &self,
        mut path: NamespaceDecl,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> NamespaceDecl {
        if let Some(additions) = self.synthesize(&path, diagnostics)
            && let Some(body) = path.body.as_mut()
        {
            body.extend(additions);
        }
        path
    }

    /// The declarations to append to `path`, if any.
    pub fn synthesize(
        &self,
        path: &NamespaceDecl,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<Vec<Statement>> {
        let location = format!("{}.{}", self.container, path.name);

        if path.statements().is_empty() {
            let reason = if path.body.is_none() { "no body" } else { "an empty body" };
            diagnostics.push(
                Diagnostic::info(
                    PHASE,
                    format!("path declaration has {}; left unchanged", reason),
                )
                .at(location),
            );
            return None;
        }

        let Some(metadata) = self.metadata.lookup(&path.name) else {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!("no operation metadata for '{}'; left unchanged", path.name),
                )
                .at(location),
            );
            return None;
        };

        let resolver = TypeResolver::new(self.container, path, self.config.placeholder);
        let types = resolver.resolve_all();

        let descriptor = descriptor(metadata, &types, resolver.placeholder());
        let mut additions: Vec<Statement> = vec![descriptor.into()];
        if let Some(name) = &self.config.route_type_name {
            additions.push(route_alias(name, &types).into());
        }
        Some(additions)
    }
}

/// `interface Config { ... }`: metadata fields as string-literal types, then
/// one property per category, optional exactly when it fell back to the
/// placeholder.
fn descriptor(
    metadata: &OperationMetadata,
    types: &RouteTypes,
    placeholder: &TypeExpr,
) -> InterfaceDecl {
    let fields = metadata
        .fields()
        .into_iter()
        .map(|(name, value)| PropertySignature::new(name, TypeExpr::string_literal(value)));

    let categories = types.iter().map(|(category, ty)| {
        PropertySignature::new(category.property_name(), ty.clone())
            .optional_if(ty == placeholder)
    });

    fields
        .chain(categories)
        .fold(InterfaceDecl::new(DESCRIPTOR_NAME), InterfaceDecl::member)
}

/// `type <name> = RequestHandler<pathParams, responses, requestBody, queryParams>;`
fn route_alias(name: &str, types: &RouteTypes) -> TypeAliasDecl {
    TypeAliasDecl::new(name, TypeExpr::generic(REQUEST_HANDLER, types.handler_args()))
}

#[cfg(test)]
mod tests {
    use routegen_ast::{Keyword, builder::CodeBuilder};
    use routegen_manifest::{HttpMethod, PlaceholderType, SchemaSelection};

    use super::*;

    fn config(route_type_name: Option<&str>) -> Config {
        Config {
            placeholder: PlaceholderType::Unknown,
            route_type_name: route_type_name.map(str::to_string),
            schema_selection: SchemaSelection::Merge,
        }
    }

    fn table() -> MetadataTable {
        let mut table = MetadataTable::new();
        table.insert(OperationMetadata::new(
            "deletePet",
            HttpMethod::Delete,
            "/pets/{id}",
        ));
        table
    }

    fn delete_pet() -> NamespaceDecl {
        NamespaceDecl::new("DeletePet")
            .statement(
                InterfaceDecl::new("PathParameters")
                    .exported()
                    .property("id", TypeExpr::qualified("Parameters.Id")),
            )
            .statement(
                NamespaceDecl::new("Responses").statement(
                    TypeAliasDecl::new("Default", TypeExpr::qualified("Components.Schemas.Error"))
                        .exported(),
                ),
            )
    }

    fn print(statements: &[Statement]) -> String {
        let mut builder = CodeBuilder::declaration();
        builder.emit(statements);
        builder.build()
    }

    #[test]
    fn test_descriptor_and_alias() {
        let table = table();
        let config = config(Some("Route"));
        let rewriter = PathRewriter::new("Paths", &table, &config);

        let additions = rewriter
            .synthesize(&delete_pet(), &mut Vec::new())
            .unwrap();
        assert_eq!(
            print(&additions),
            r#"interface Config {
    operationId: "deletePet";
    method: "delete";
    expressPath: "/pets/:id";
    openapiPath: "/pets/{id}";
    pathParams: Paths.DeletePet.PathParameters;
    responses: Paths.DeletePet.Responses.Default;
    successResponses?: unknown;
    requestBody?: unknown;
    queryParams?: unknown;
    headers?: unknown;
}
type Route = RequestHandler<Paths.DeletePet.PathParameters, Paths.DeletePet.Responses.Default, unknown, unknown>;
"#
        );
    }

    #[test]
    fn test_no_alias_without_route_type_name() {
        let table = table();
        let config = config(None);
        let rewriter = PathRewriter::new("Paths", &table, &config);

        let additions = rewriter
            .synthesize(&delete_pet(), &mut Vec::new())
            .unwrap();
        assert_eq!(additions.len(), 1);
        assert_eq!(additions[0].declared_name(), Some(DESCRIPTOR_NAME));
    }

    #[test]
    fn test_rewrite_appends_after_existing() {
        let table = table();
        let config = config(Some("Route"));
        let rewriter = PathRewriter::new("Paths", &table, &config);

        let original = delete_pet();
        let rewritten = rewriter.rewrite(original.clone(), &mut Vec::new());
        let body = rewritten.statements();

        assert_eq!(body.len(), original.statements().len() + 2);
        assert_eq!(&body[..original.statements().len()], original.statements());
        assert_eq!(body[2].declared_name(), Some("Config"));
        assert_eq!(body[3].declared_name(), Some("Route"));
    }

    #[test]
    fn test_metadata_miss_leaves_path_unchanged() {
        let table = MetadataTable::new();
        let config = config(Some("Route"));
        let rewriter = PathRewriter::new("Paths", &table, &config);

        let mut diagnostics = Vec::new();
        let rewritten = rewriter.rewrite(delete_pet(), &mut diagnostics);

        assert_eq!(rewritten, delete_pet());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Paths.DeletePet"));
    }

    #[test]
    fn test_bodiless_and_empty_paths_unchanged() {
        let table = table();
        let config = config(Some("Route"));
        let rewriter = PathRewriter::new("Paths", &table, &config);
        let mut diagnostics = Vec::new();

        let bodiless = NamespaceDecl::new("DeletePet").without_body();
        assert_eq!(rewriter.rewrite(bodiless.clone(), &mut diagnostics), bodiless);

        let empty = NamespaceDecl::new("DeletePet");
        assert_eq!(rewriter.rewrite(empty.clone(), &mut diagnostics), empty);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity == crate::pipeline::Severity::Info));
    }

    #[test]
    fn test_placeholder_any_marks_optional() {
        let table = table();
        let config = Config {
            placeholder: PlaceholderType::Any,
            ..config(None)
        };
        let rewriter = PathRewriter::new("Paths", &table, &config);
        let additions = rewriter
            .synthesize(&delete_pet(), &mut Vec::new())
            .unwrap();

        let Statement::Interface(descriptor) = &additions[0] else {
            panic!("expected descriptor interface");
        };
        let body_prop = descriptor
            .members
            .iter()
            .find(|m| m.name == "requestBody")
            .unwrap();
        assert!(body_prop.optional);
        assert_eq!(body_prop.ty, TypeExpr::keyword(Keyword::Any));

        let params_prop = descriptor
            .members
            .iter()
            .find(|m| m.name == "pathParams")
            .unwrap();
        assert!(!params_prop.optional);
    }
}
