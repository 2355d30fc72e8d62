//! Lookups over a namespace body.

use routegen_ast::Statement;

/// Find the first namespace, interface or type alias named `name` in `scope`.
///
/// Only the first match is reachable; later declarations with the same name
/// are shadowed. Imports and verbatim statements never match.
pub fn find_declaration<'a>(scope: &'a [Statement], name: &str) -> Option<&'a Statement> {
    scope
        .iter()
        .find(|statement| statement.declared_name() == Some(name))
}

/// The interfaces and type aliases declared directly in a namespace body,
/// in source order.
///
/// Nested namespaces and other statements are skipped. Anything that is not a
/// namespace with a body yields an empty list.
pub fn collect_named_types(node: &Statement) -> Vec<&Statement> {
    match node {
        Statement::Namespace(ns) => ns
            .statements()
            .iter()
            .filter(|statement| statement.is_named_type())
            .collect(),
        _ => Vec::new(),
    }
}
