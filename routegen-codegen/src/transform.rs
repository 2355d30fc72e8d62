//! Tree walker: finds the paths containers and rewrites their path declarations.

use routegen_ast::{ImportDecl, NamespaceDecl, SourceTree, Statement};
use routegen_manifest::{Config, REQUEST_HANDLER};

use crate::{metadata::MetadataTable, pipeline::Diagnostic, rewrite::PathRewriter};

const PHASE: &str = "rewrite";

/// Name of the top-level namespace holding one namespace per path.
pub const PATHS_CONTAINER: &str = "Paths";

/// Module the request-handler type is imported from.
pub const HANDLER_MODULE: &str = "express";

/// `import { RequestHandler } from "express";`
pub fn handler_import() -> ImportDecl {
    ImportDecl::new(HANDLER_MODULE).named(REQUEST_HANDLER)
}

/// The tree transform returned by the post-process hook.
///
/// Holds the resolved configuration and the metadata table for one
/// generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTransformer {
    config: Config,
    metadata: MetadataTable,
}

impl RouteTransformer {
    pub fn new(config: Config, metadata: MetadataTable) -> Self {
        Self { config, metadata }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metadata(&self) -> &MetadataTable {
        &self.metadata
    }

    /// Rewrite every path declaration of every top-level `Paths` namespace.
    ///
    /// Other statements are passed through unchanged. When a route alias is
    /// configured, the request-handler import is prepended once.
    pub fn transform(&self, tree: SourceTree, diagnostics: &mut Vec<Diagnostic>) -> SourceTree {
        let mut found_container = false;
        let mut statements: Vec<Statement> = tree
            .statements
            .into_iter()
            .map(|statement| match statement {
                Statement::Namespace(ns) if ns.name == PATHS_CONTAINER => {
                    found_container = true;
                    Statement::Namespace(self.rewrite_container(ns, diagnostics))
                }
                other => other,
            })
            .collect();

        if !found_container {
            diagnostics.push(Diagnostic::info(
                PHASE,
                format!("no top-level '{}' namespace; nothing to rewrite", PATHS_CONTAINER),
            ));
        }

        if self.config.route_type_name.is_some() {
            statements.insert(0, handler_import().into());
        }

        SourceTree::new(statements)
    }

    fn rewrite_container(
        &self,
        mut container: NamespaceDecl,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> NamespaceDecl {
        let rewriter = PathRewriter::new(&container.name, &self.metadata, &self.config);
        let body = container.body.take().map(|body| {
            body.into_iter()
                .map(|statement| match statement {
                    Statement::Namespace(path) => {
                        Statement::Namespace(rewriter.rewrite(path, diagnostics))
                    }
                    other => other,
                })
                .collect()
        });
        container.body = body;
        container
    }
}
