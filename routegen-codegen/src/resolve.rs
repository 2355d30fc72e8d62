//! Type reference synthesis for the parameter categories of a path.

use std::sync::LazyLock;

use regex_lite::Regex;
use routegen_ast::{Keyword, NamespaceDecl, Statement, TypeExpr};
use routegen_manifest::PlaceholderType;

use crate::{
    category::ParameterCategory,
    locate::{collect_named_types, find_declaration},
};

/// Response members named after a 2xx status code (`$200`, `$204`...).
static SUCCESS_RESPONSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$2\d\d$").expect("success response pattern is valid"));

/// Whether a response member name denotes a 2xx status code.
pub fn is_success_response(name: &str) -> bool {
    SUCCESS_RESPONSE.is_match(name)
}

/// The keyword type substituted for categories a path does not declare.
pub fn placeholder_type(placeholder: PlaceholderType) -> TypeExpr {
    match placeholder {
        PlaceholderType::Any => TypeExpr::keyword(Keyword::Any),
        PlaceholderType::Unknown => TypeExpr::keyword(Keyword::Unknown),
    }
}

/// Resolves parameter categories of one path declaration into type
/// expressions qualified from the paths container
/// (`Paths.DeletePet.PathParameters`).
#[derive(Debug, Clone)]
pub struct TypeResolver<'a> {
    scope: &'a [Statement],
    prefix: Vec<&'a str>,
    placeholder: TypeExpr,
}

impl<'a> TypeResolver<'a> {
    pub fn new(container: &'a str, path: &'a NamespaceDecl, placeholder: PlaceholderType) -> Self {
        Self {
            scope: path.statements(),
            prefix: vec![container, path.name.as_str()],
            placeholder: placeholder_type(placeholder),
        }
    }

    pub fn placeholder(&self) -> &TypeExpr {
        &self.placeholder
    }

    /// Resolve one category.
    ///
    /// - absent child: the placeholder
    /// - `Responses`: union of every named member, or the placeholder if none
    /// - `SuccessResponses`: same, restricted to 2xx members
    /// - anything else: a direct reference to the child
    pub fn resolve(&self, category: ParameterCategory) -> TypeExpr {
        let lookup = category.lookup_name();
        let Some(node) = find_declaration(self.scope, lookup) else {
            return self.placeholder.clone();
        };

        if !category.is_response() {
            return self.reference(&[lookup]);
        }

        let success_only = category == ParameterCategory::SuccessResponses;
        let members: Vec<TypeExpr> = collect_named_types(node)
            .into_iter()
            .filter_map(Statement::declared_name)
            .filter(|name| !success_only || is_success_response(name))
            .map(|name| self.reference(&[lookup, name]))
            .collect();

        if members.is_empty() {
            self.placeholder.clone()
        } else {
            TypeExpr::union(members)
        }
    }

    /// Resolve all six categories.
    pub fn resolve_all(&self) -> RouteTypes {
        RouteTypes {
            path_params: self.resolve(ParameterCategory::PathParameters),
            responses: self.resolve(ParameterCategory::Responses),
            success_responses: self.resolve(ParameterCategory::SuccessResponses),
            request_body: self.resolve(ParameterCategory::RequestBody),
            query_params: self.resolve(ParameterCategory::QueryParameters),
            headers: self.resolve(ParameterCategory::HeaderParameters),
        }
    }

    fn reference(&self, tail: &[&str]) -> TypeExpr {
        TypeExpr::reference(self.prefix.iter().copied().chain(tail.iter().copied()))
    }
}

/// The resolved types of every category of one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTypes {
    pub path_params: TypeExpr,
    pub responses: TypeExpr,
    pub success_responses: TypeExpr,
    pub request_body: TypeExpr,
    pub query_params: TypeExpr,
    pub headers: TypeExpr,
}

impl RouteTypes {
    pub fn get(&self, category: ParameterCategory) -> &TypeExpr {
        match category {
            ParameterCategory::PathParameters => &self.path_params,
            ParameterCategory::Responses => &self.responses,
            ParameterCategory::SuccessResponses => &self.success_responses,
            ParameterCategory::RequestBody => &self.request_body,
            ParameterCategory::QueryParameters => &self.query_params,
            ParameterCategory::HeaderParameters => &self.headers,
        }
    }

    /// Categories and their types in descriptor member order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterCategory, &TypeExpr)> {
        ParameterCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Type arguments of the route-handler alias:
    /// path params, responses, request body, query params.
    pub fn handler_args(&self) -> Vec<TypeExpr> {
        vec![
            self.path_params.clone(),
            self.responses.clone(),
            self.request_body.clone(),
            self.query_params.clone(),
        ]
    }
}
