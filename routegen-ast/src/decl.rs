//! Declaration nodes.

use serde::{Deserialize, Serialize};

use crate::{TypeExpr, ident};

/// A statement in a file or namespace body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Statement {
    Import(ImportDecl),
    Namespace(NamespaceDecl),
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    /// Any other construct, carried through as text.
    Verbatim(Verbatim),
}

impl Statement {
    /// The declared name of a namespace, interface or type alias.
    ///
    /// Imports and verbatim statements have no name and never match a lookup.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Statement::Namespace(ns) => Some(&ns.name),
            Statement::Interface(iface) => Some(&iface.name),
            Statement::TypeAlias(alias) => Some(&alias.name),
            Statement::Import(_) | Statement::Verbatim(_) => None,
        }
    }

    /// Whether this is an interface or a type alias.
    pub fn is_named_type(&self) -> bool {
        matches!(self, Statement::Interface(_) | Statement::TypeAlias(_))
    }

    pub fn as_namespace(&self) -> Option<&NamespaceDecl> {
        match self {
            Statement::Namespace(ns) => Some(ns),
            _ => None,
        }
    }
}

impl From<ImportDecl> for Statement {
    fn from(value: ImportDecl) -> Self {
        Statement::Import(value)
    }
}

impl From<NamespaceDecl> for Statement {
    fn from(value: NamespaceDecl) -> Self {
        Statement::Namespace(value)
    }
}

impl From<InterfaceDecl> for Statement {
    fn from(value: InterfaceDecl) -> Self {
        Statement::Interface(value)
    }
}

impl From<TypeAliasDecl> for Statement {
    fn from(value: TypeAliasDecl) -> Self {
        Statement::TypeAlias(value)
    }
}

impl From<Verbatim> for Statement {
    fn from(value: Verbatim) -> Self {
        Statement::Verbatim(value)
    }
}

/// `namespace Name { ... }`.
///
/// A namespace without a body (`body: None`) is a shorthand ambient
/// declaration and is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    pub name: String,
    #[serde(default)]
    pub declare: bool,
    #[serde(default)]
    pub exported: bool,
    #[serde(default)]
    pub body: Option<Vec<Statement>>,
}

impl NamespaceDecl {
    /// Create a namespace with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declare: false,
            exported: false,
            body: Some(Vec::new()),
        }
    }

    /// Mark as `declare namespace`.
    pub fn declare(mut self) -> Self {
        self.declare = true;
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Append a statement to the body, creating the body if needed.
    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .push(statement.into());
        self
    }

    /// The body statements, empty when there is no body.
    pub fn statements(&self) -> &[Statement] {
        self.body.as_deref().unwrap_or_default()
    }
}

/// A property signature in an interface or object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Trailing line comment (`// int32`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
            comment: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// `name?: type`, without the terminating semicolon.
    pub fn signature(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {}", ident::property_name(&self.name), optional, self.ty)
    }
}

/// `interface Name { ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    #[serde(default)]
    pub exported: bool,
    #[serde(default)]
    pub members: Vec<PropertySignature>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: false,
            members: Vec::new(),
        }
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn member(mut self, member: PropertySignature) -> Self {
        self.members.push(member);
        self
    }

    /// Add a required property.
    pub fn property(self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.member(PropertySignature::new(name, ty))
    }
}

/// `type Name = <type>;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: String,
    #[serde(default)]
    pub exported: bool,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TypeAliasDecl {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            exported: false,
            ty,
            comment: None,
        }
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// `import ... from "module";`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDecl {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub named: Vec<String>,
    #[serde(default)]
    pub type_only: bool,
}

impl ImportDecl {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }
}

/// Source text the model does not interpret (variable declarations,
/// comments, enums...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verbatim {
    pub text: String,
}

impl Verbatim {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
