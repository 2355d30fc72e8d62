//! The root of a declaration file.

use serde::{Deserialize, Serialize};

use crate::{
    Statement,
    builder::{CodeBuilder, Indent},
};

/// A whole declaration file: an ordered list of top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTree {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl SourceTree {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Parse a tree from its JSON form.
    pub fn from_json(src: &str) -> serde_json::Result<Self> {
        serde_json::from_str(src)
    }

    /// Serialize the tree to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print the tree as declaration-file text.
    pub fn print(&self) -> String {
        self.print_with_indent(Indent::DECLARATION)
    }

    /// Print the tree with custom indentation.
    pub fn print_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self.statements.as_slice());
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImportDecl, InterfaceDecl, Keyword, NamespaceDecl, TypeExpr};

    #[test]
    fn test_empty_tree() {
        assert_eq!(SourceTree::default().print(), "");
    }

    #[test]
    fn test_print_with_compact_indent() {
        let tree = SourceTree::new(vec![
            ImportDecl::new("express").named("RequestHandler").into(),
            NamespaceDecl::new("Components")
                .declare()
                .statement(
                    InterfaceDecl::new("Pet")
                        .exported()
                        .property("name", TypeExpr::keyword(Keyword::String)),
                )
                .into(),
        ]);

        assert_eq!(
            tree.print_with_indent(Indent::Spaces(2)),
            "import { RequestHandler } from \"express\";\n\
             declare namespace Components {\n  \
               export interface Pet {\n    \
                 name: string;\n  \
               }\n\
             }\n"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let tree = SourceTree::new(vec![
            NamespaceDecl::new("Paths")
                .declare()
                .statement(NamespaceDecl::new("FindPets"))
                .into(),
        ]);
        let json = tree.to_json_pretty().unwrap();
        assert_eq!(SourceTree::from_json(&json).unwrap(), tree);
    }
}
