//! End-to-end tests over the petstore declaration tree.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use routegen_ast::{
    InterfaceDecl, Keyword, NamespaceDecl, PropertySignature, SourceTree, Statement,
    TypeAliasDecl, TypeExpr,
};
use routegen_codegen::{
    PluginContext, RoutePlugin, Severity,
    pipeline::{CompilationContext, Pipeline},
};
use routegen_manifest::{Format, PluginOption, SchemaDocument};

const PETSTORE: &str = r#"{
  "openapi": "3.0.0",
  "info": { "title": "Swagger Petstore", "version": "1.0.0" },
  "paths": {
    "/pets": {
      "get": { "operationId": "findPets" },
      "post": { "operationId": "addPet" }
    },
    "/pets/{id}": {
      "get": { "operationId": "find pet by id" },
      "delete": { "operationId": "deletePet" }
    }
  }
}"#;

fn petstore_schema() -> SchemaDocument {
    SchemaDocument::from_str_with_format(PETSTORE, "petstore.json", Format::Json)
        .expect("Failed to parse petstore schema")
}

fn option(json: serde_json::Value) -> Option<PluginOption> {
    Some(serde_json::from_value(json).expect("Failed to parse option"))
}

fn string() -> TypeExpr {
    TypeExpr::keyword(Keyword::String)
}

fn number() -> TypeExpr {
    TypeExpr::keyword(Keyword::Number)
}

fn components() -> NamespaceDecl {
    NamespaceDecl::new("Components").declare().statement(
        NamespaceDecl::new("Schemas")
            .statement(
                InterfaceDecl::new("Error")
                    .exported()
                    .member(PropertySignature::new("code", number()).comment("int32"))
                    .property("message", string()),
            )
            .statement(
                InterfaceDecl::new("NewPet")
                    .exported()
                    .property("name", string())
                    .member(PropertySignature::new("tag", string()).optional()),
            )
            .statement(
                InterfaceDecl::new("Pet")
                    .exported()
                    .property("name", string())
                    .member(PropertySignature::new("tag", string()).optional())
                    .member(PropertySignature::new("id", number()).comment("int64")),
            ),
    )
}

fn id_parameter() -> [Statement; 2] {
    [
        NamespaceDecl::new("Parameters")
            .statement(
                TypeAliasDecl::new("Id", number())
                    .exported()
                    .comment("int64"),
            )
            .into(),
        InterfaceDecl::new("PathParameters")
            .exported()
            .property("id", TypeExpr::raw("Parameters.Id /* int64 */"))
            .into(),
    ]
}

fn responses(members: Vec<TypeAliasDecl>) -> NamespaceDecl {
    members
        .into_iter()
        .fold(NamespaceDecl::new("Responses"), |ns, alias| {
            ns.statement(alias.exported())
        })
}

fn paths() -> NamespaceDecl {
    let add_pet = NamespaceDecl::new("AddPet")
        .statement(
            TypeAliasDecl::new("RequestBody", TypeExpr::qualified("Components.Schemas.NewPet"))
                .exported(),
        )
        .statement(
            NamespaceDecl::new("Responses")
                .statement(InterfaceDecl::new("$200").exported())
                .statement(TypeAliasDecl::new("Default", TypeExpr::object(Vec::new())).exported()),
        );

    let [parameters, path_parameters] = id_parameter();
    let delete_pet = NamespaceDecl::new("DeletePet")
        .statement(parameters)
        .statement(path_parameters)
        .statement(responses(vec![TypeAliasDecl::new(
            "Default",
            TypeExpr::qualified("Components.Schemas.Error"),
        )]));

    let [parameters, path_parameters] = id_parameter();
    let find_pet_by_id = NamespaceDecl::new("FindPetById")
        .statement(parameters)
        .statement(path_parameters)
        .statement(responses(vec![
            TypeAliasDecl::new("$200", TypeExpr::qualified("Components.Schemas.Pet")),
            TypeAliasDecl::new("Default", TypeExpr::qualified("Components.Schemas.Error")),
        ]));

    let find_pets = NamespaceDecl::new("FindPets")
        .statement(
            NamespaceDecl::new("Parameters")
                .statement(
                    TypeAliasDecl::new("Limit", number())
                        .exported()
                        .comment("int32"),
                )
                .statement(TypeAliasDecl::new("Tags", TypeExpr::array(string())).exported()),
        )
        .statement(
            InterfaceDecl::new("QueryParameters")
                .exported()
                .member(
                    PropertySignature::new("tags", TypeExpr::qualified("Parameters.Tags"))
                        .optional(),
                )
                .member(
                    PropertySignature::new("limit", TypeExpr::raw("Parameters.Limit /* int32 */"))
                        .optional(),
                ),
        )
        .statement(responses(vec![
            TypeAliasDecl::new(
                "$200",
                TypeExpr::array(TypeExpr::qualified("Components.Schemas.Pet")),
            ),
            TypeAliasDecl::new("Default", TypeExpr::qualified("Components.Schemas.Error")),
        ]));

    NamespaceDecl::new("Paths")
        .declare()
        .statement(add_pet)
        .statement(delete_pet)
        .statement(find_pet_by_id)
        .statement(find_pets)
}

fn petstore_tree() -> SourceTree {
    SourceTree::new(vec![components().into(), paths().into()])
}

fn run(option: Option<PluginOption>) -> CompilationContext {
    let ctx = CompilationContext::new(option, vec![petstore_schema()]).with_tree(petstore_tree());
    Pipeline::new().run(ctx).expect("Pipeline failed")
}

#[test]
fn test_petstore_routes() {
    let ctx = run(option(serde_json::json!({
        "placeholderType": "unknown",
        "routeTypeName": "Route"
    })));
    let printed = ctx.tree.expect("tree should be kept").print();
    insta::assert_snapshot!("petstore_routes", printed);
}

#[test]
fn test_petstore_unmatched_operation_id_warns() {
    // "find pet by id" normalizes to "find pet by id", not "findpetbyid"
    let ctx = run(option(serde_json::json!(true)));
    let warnings: Vec<_> = ctx.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].location.as_deref(), Some("Paths.FindPetById"));
}

#[test]
fn test_petstore_components_untouched() {
    let ctx = run(option(serde_json::json!({ "routeTypeName": "Route" })));
    let tree = ctx.tree.expect("tree should be kept");
    assert_eq!(tree.statements[1], Statement::Namespace(components()));
}

#[test]
fn test_petstore_disabled() {
    let ctx = run(option(serde_json::json!(false)));
    assert_eq!(ctx.tree, Some(petstore_tree()));
    assert!(ctx.transformer.is_none());
}

#[test]
fn test_delete_pet_scenario() {
    let delete_pet = NamespaceDecl::new("DeletePet")
        .statement(NamespaceDecl::new("Parameters").statement(TypeAliasDecl::new("Id", number())))
        .statement(
            InterfaceDecl::new("PathParameters").property("id", TypeExpr::qualified("Parameters.Id")),
        )
        .statement(
            NamespaceDecl::new("Responses").statement(TypeAliasDecl::new(
                "Default",
                TypeExpr::qualified("Components.Schemas.Error"),
            )),
        );
    let tree = SourceTree::new(vec![
        NamespaceDecl::new("Paths")
            .statement(delete_pet.clone())
            .into(),
    ]);

    let schema = SchemaDocument::from_str_with_format(
        r#"{"paths":{"/pets/{id}":{"delete":{"operationId":"deletePet"}}}}"#,
        "delete.json",
        Format::Json,
    )
    .expect("Failed to parse schema");
    let docs = vec![schema];
    let ctx = PluginContext::from_documents(
        option(serde_json::json!({ "routeTypeName": "Route", "placeholderType": "unknown" })),
        &docs,
    );

    let mut diagnostics = Vec::new();
    let output = RoutePlugin::new().transform(ctx, tree, &mut diagnostics);
    assert!(diagnostics.iter().all(|d| d.severity != Severity::Warning));

    let Statement::Namespace(paths) = &output.statements[1] else {
        panic!("expected Paths namespace after the import");
    };
    let Statement::Namespace(rewritten) = &paths.statements()[0] else {
        panic!("expected DeletePet namespace");
    };

    let original_len = delete_pet.statements().len();
    assert_eq!(&rewritten.statements()[..original_len], delete_pet.statements());

    let appended = SourceTree::new(rewritten.statements()[original_len..].to_vec()).print();
    assert_eq!(
        appended,
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
