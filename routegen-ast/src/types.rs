//! Type expressions used by aliases and property signatures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PropertySignature, ident};

/// Built-in keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Object,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Any => "any",
            Keyword::Unknown => "unknown",
            Keyword::Never => "never",
            Keyword::Void => "void",
            Keyword::Undefined => "undefined",
            Keyword::Null => "null",
            Keyword::Boolean => "boolean",
            Keyword::Number => "number",
            Keyword::String => "string",
            Keyword::Object => "object",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type expression.
///
/// Closed over the shapes the route synthesis reads and writes; anything
/// else coming from upstream is carried as [`TypeExpr::Raw`] text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeExpr {
    /// A dotted type reference such as `Paths.DeletePet.PathParameters`,
    /// optionally instantiated with type arguments (`RequestHandler<A, B>`).
    Reference {
        path: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeExpr>,
    },
    /// `A | B | C`. Members keep their order and are never deduplicated.
    Union { members: Vec<TypeExpr> },
    Keyword { keyword: Keyword },
    /// A string literal type such as `"deletePet"`.
    StringLiteral { value: String },
    Array { element: Box<TypeExpr> },
    /// An inline object type (`{ a: string; }`).
    Object {
        #[serde(default)]
        members: Vec<PropertySignature>,
    },
    Raw { text: String },
}

impl TypeExpr {
    /// Reference built from explicit segments.
    pub fn reference<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeExpr::Reference {
            path: segments.into_iter().map(Into::into).collect(),
            args: Vec::new(),
        }
    }

    /// Reference parsed from a dotted name (`"Components.Schemas.Pet"`).
    pub fn qualified(name: &str) -> Self {
        Self::reference(name.split('.'))
    }

    /// Generic instantiation (`name<args...>`).
    pub fn generic(name: &str, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Reference {
            path: name.split('.').map(str::to_string).collect(),
            args,
        }
    }

    pub fn union(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Union { members }
    }

    pub fn keyword(keyword: Keyword) -> Self {
        TypeExpr::Keyword { keyword }
    }

    pub fn string_literal(value: impl Into<String>) -> Self {
        TypeExpr::StringLiteral {
            value: value.into(),
        }
    }

    pub fn array(element: TypeExpr) -> Self {
        TypeExpr::Array {
            element: Box::new(element),
        }
    }

    pub fn object(members: Vec<PropertySignature>) -> Self {
        TypeExpr::Object { members }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        TypeExpr::Raw { text: text.into() }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Reference { path, args } => {
                f.write_str(&path.join("."))?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    write_joined(f, args, ", ")?;
                    f.write_str(">")?;
                }
                Ok(())
            }
            // An empty union has no members to print; `never` is its meaning.
            TypeExpr::Union { members } if members.is_empty() => f.write_str("never"),
            TypeExpr::Union { members } => write_joined(f, members, " | "),
            TypeExpr::Keyword { keyword } => write!(f, "{}", keyword),
            TypeExpr::StringLiteral { value } => f.write_str(&ident::quote(value)),
            TypeExpr::Array { element } => match element.as_ref() {
                TypeExpr::Union { members } if members.len() > 1 => write!(f, "({})[]", element),
                _ => write!(f, "{}[]", element),
            },
            TypeExpr::Object { members } if members.is_empty() => f.write_str("{}"),
            TypeExpr::Object { members } => {
                f.write_str("{ ")?;
                for member in members {
                    write!(f, "{}; ", member.signature())?;
                }
                f.write_str("}")
            }
            TypeExpr::Raw { text } => f.write_str(text),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[TypeExpr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
