//! Declaration tree model for routegen.
//!
//! A [`SourceTree`] mirrors the declaration file an OpenAPI-to-TypeScript
//! generator emits: top-level `declare namespace` blocks holding interfaces,
//! type aliases and nested namespaces. The tree is a closed set of variants
//! ([`Statement`], [`TypeExpr`]) so every consumer matches exhaustively.
//!
//! # Usage
//!
//! ```
//! use routegen_ast::{InterfaceDecl, Keyword, NamespaceDecl, SourceTree, TypeExpr};
//!
//! let tree = SourceTree::new(vec![
//!     NamespaceDecl::new("Paths")
//!         .declare()
//!         .statement(
//!             NamespaceDecl::new("FindPets").statement(
//!                 InterfaceDecl::new("QueryParameters")
//!                     .exported()
//!                     .property("limit", TypeExpr::keyword(Keyword::Number)),
//!             ),
//!         )
//!         .into(),
//! ]);
//!
//! assert!(tree.print().contains("export interface QueryParameters {"));
//! ```

pub mod builder;
mod decl;
pub mod ident;
mod render;
mod tree;
mod types;

pub use decl::{
    ImportDecl, InterfaceDecl, NamespaceDecl, PropertySignature, Statement, TypeAliasDecl,
    Verbatim,
};
pub use tree::SourceTree;
pub use types::{Keyword, TypeExpr};
