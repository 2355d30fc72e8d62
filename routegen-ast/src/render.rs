//! Printing of declaration nodes.
//!
//! Output follows the TypeScript compiler's printer closely enough that a
//! rewritten tree diffs cleanly against the upstream generator's output:
//! four-space indentation, no blank lines between declarations, and empty
//! interfaces printed as an open/close pair.

use crate::{
    ImportDecl, InterfaceDecl, NamespaceDecl, PropertySignature, Statement, TypeAliasDecl,
    Verbatim,
    builder::{CodeFragment, Renderable},
};

fn export_prefix(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

fn trailing_comment(comment: Option<&str>) -> String {
    comment.map(|c| format!(" // {}", c)).unwrap_or_default()
}

impl Renderable for Statement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Statement::Import(import) => import.to_fragments(),
            Statement::Namespace(ns) => ns.to_fragments(),
            Statement::Interface(iface) => iface.to_fragments(),
            Statement::TypeAlias(alias) => alias.to_fragments(),
            Statement::Verbatim(verbatim) => verbatim.to_fragments(),
        }
    }
}

impl Renderable for NamespaceDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let modifiers = match (self.declare, self.exported) {
            (true, true) => "export declare ",
            (true, false) => "declare ",
            (false, true) => "export ",
            (false, false) => "",
        };

        match &self.body {
            None => vec![CodeFragment::line(format!(
                "{}namespace {};",
                modifiers, self.name
            ))],
            Some(body) => vec![CodeFragment::block(
                format!("{}namespace {} {{", modifiers, self.name),
                body.as_slice().to_fragments(),
                Some("}".to_string()),
            )],
        }
    }
}

impl Renderable for PropertySignature {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{};{}",
            self.signature(),
            trailing_comment(self.comment.as_deref())
        ))]
    }
}

impl Renderable for InterfaceDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("{}interface {} {{", export_prefix(self.exported), self.name),
            self.members.as_slice().to_fragments(),
            Some("}".to_string()),
        )]
    }
}

impl Renderable for TypeAliasDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{}type {} = {};{}",
            export_prefix(self.exported),
            self.name,
            self.ty,
            trailing_comment(self.comment.as_deref())
        ))]
    }
}

impl Renderable for ImportDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_kw = if self.type_only { "type " } else { "" };
        let from = crate::ident::quote(&self.from);

        let line = match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from {};", type_kw, def, from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from {};",
                type_kw,
                def,
                self.named.join(", "),
                from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from {};",
                type_kw,
                self.named.join(", "),
                from
            ),
            (None, true) => format!("import {};", from),
        };

        vec![CodeFragment::line(line)]
    }
}

impl Renderable for Verbatim {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.text.lines().map(CodeFragment::line).collect()
    }
}
