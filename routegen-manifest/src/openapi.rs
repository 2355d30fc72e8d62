//! The slice of an OpenAPI document the route plugin reads and writes.
//!
//! Only `paths.<template>.<method>.operationId` is interpreted. Everything
//! else is kept as raw JSON values in document order so a document can be
//! handed back to the host after operation ids were filled in.

use std::{fmt, ops::Index};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use serde_json::{Map, Value};


/// HTTP methods that may appear as keys of a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// The lower-case key used in path items.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Parse a path item key. Keys are case-sensitive, as in OpenAPI.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation object. Only `operationId` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operation {
    fields: Map<String, Value>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style constructor for an operation with an id.
    pub fn with_id(operation_id: impl Into<String>) -> Self {
        let mut op = Self::new();
        op.set_operation_id(operation_id);
        op
    }

    /// The operation id, if present and non-empty.
    pub fn operation_id(&self) -> Option<&str> {
        self.fields
            .get("operationId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Set the operation id, keeping its position if the key already exists.
    pub fn set_operation_id(&mut self, operation_id: impl Into<String>) {
        self.fields.insert(
            "operationId".to_string(),
            Value::String(operation_id.into()),
        );
    }

    /// Any other field of the operation object.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PathItemEntry {
    Operation(HttpMethod, Operation),
    Other(String, Value),
}

/// A path item: operations keyed by method, plus shared fields
/// (`parameters`, `summary`, `$ref`...) which are never treated as operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    entries: Vec<PathItemEntry>,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the operation for `method`.
    pub fn with_operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        let existing = self.entries.iter_mut().find_map(|entry| match entry {
            PathItemEntry::Operation(m, op) if *m == method => Some(op),
            _ => None,
        });
        match existing {
            Some(op) => *op = operation,
            None => self
                .entries
                .push(PathItemEntry::Operation(method, operation)),
        }
        self
    }

    /// Operations in document order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        self.entries.iter().filter_map(|entry| match entry {
            PathItemEntry::Operation(method, op) => Some((*method, op)),
            PathItemEntry::Other(..) => None,
        })
    }

    /// Mutable operations in document order.
    pub fn operations_mut(&mut self) -> impl Iterator<Item = (HttpMethod, &mut Operation)> {
        self.entries.iter_mut().filter_map(|entry| match entry {
            PathItemEntry::Operation(method, op) => Some((*method, op)),
            PathItemEntry::Other(..) => None,
        })
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations()
            .find_map(|(m, op)| (m == method).then_some(op))
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find_map(|entry| match entry {
            PathItemEntry::Other(k, v) if k == key => Some(v),
            _ => None,
        })
    }
}

impl Serialize for PathItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            match entry {
                PathItemEntry::Operation(method, op) => map.serialize_entry(method.as_str(), op)?,
                PathItemEntry::Other(key, value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an OpenAPI path item object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PathItem, A::Error> {
                let mut entries = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    let entry = match HttpMethod::from_key(&key) {
                        Some(method) => PathItemEntry::Operation(method, map.next_value()?),
                        None => PathItemEntry::Other(key, map.next_value()?),
                    };
                    entries.push(entry);
                }
                Ok(PathItem { entries })
            }
        }

        deserializer.deserialize_map(PathItemVisitor)
    }
}

/// Prefix of specification extension keys (`x-internal`...).
const EXTENSION_PREFIX: &str = "x-";

#[derive(Debug, Clone, PartialEq)]
enum PathsEntry {
    Item(PathItem),
    Extension(Value),
}

/// The `paths` object: path template to path item, in document order.
///
/// Specification extensions (`x-` keys) are not path items. They are kept
/// as raw values in their original position and skipped by every accessor
/// except [`Paths::extension`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    entries: IndexMap<String, PathsEntry>,
}

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path item, returning the one it replaced.
    ///
    /// A replaced template keeps its position.
    pub fn insert(&mut self, path: impl Into<String>, item: PathItem) -> Option<PathItem> {
        match self.entries.insert(path.into(), PathsEntry::Item(item)) {
            Some(PathsEntry::Item(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Remove a path item, shifting later entries down.
    pub fn shift_remove(&mut self, path: &str) -> Option<PathItem> {
        if !self.contains_key(path) {
            return None;
        }
        match self.entries.shift_remove(path) {
            Some(PathsEntry::Item(item)) => Some(item),
            _ => None,
        }
    }

    pub fn get(&self, path: &str) -> Option<&PathItem> {
        match self.entries.get(path) {
            Some(PathsEntry::Item(item)) => Some(item),
            _ => None,
        }
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Number of path items; extensions are not counted.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether there are no path items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path items in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PathItem)> {
        self.entries.iter().filter_map(|(path, entry)| match entry {
            PathsEntry::Item(item) => Some((path, item)),
            PathsEntry::Extension(_) => None,
        })
    }

    /// Mutable path items in document order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut PathItem)> {
        self.entries.iter_mut().filter_map(|(path, entry)| match entry {
            PathsEntry::Item(item) => Some((path, item)),
            PathsEntry::Extension(_) => None,
        })
    }

    /// A specification extension of the paths object.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        match self.entries.get(key) {
            Some(PathsEntry::Extension(value)) => Some(value),
            _ => None,
        }
    }
}

impl Index<&str> for Paths {
    type Output = PathItem;

    fn index(&self, path: &str) -> &PathItem {
        self.get(path)
            .unwrap_or_else(|| panic!("no path item for '{}'", path))
    }
}

impl Extend<(String, PathItem)> for Paths {
    fn extend<T: IntoIterator<Item = (String, PathItem)>>(&mut self, iter: T) {
        for (path, item) in iter {
            self.insert(path, item);
        }
    }
}

impl FromIterator<(String, PathItem)> for Paths {
    fn from_iter<T: IntoIterator<Item = (String, PathItem)>>(iter: T) -> Self {
        let mut paths = Paths::new();
        paths.extend(iter);
        paths
    }
}

impl Serialize for Paths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            match entry {
                PathsEntry::Item(item) => map.serialize_entry(key, item)?,
                PathsEntry::Extension(value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PathsVisitor;

        impl<'de> Visitor<'de> for PathsVisitor {
            type Value = Paths;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an OpenAPI paths object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Paths, A::Error> {
                let mut entries = IndexMap::new();
                while let Some(key) = map.next_key::<String>()? {
                    let entry = if key.starts_with(EXTENSION_PREFIX) {
                        PathsEntry::Extension(map.next_value()?)
                    } else {
                        PathsEntry::Item(map.next_value()?)
                    };
                    entries.insert(key, entry);
                }
                Ok(Paths { entries })
            }
        }

        deserializer.deserialize_map(PathsVisitor)
    }
}

/// An OpenAPI document with typed `paths` and every other root field kept
/// verbatim, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenApiDocument {
    /// Root fields in document order; the `paths` slot holds `null` and is
    /// filled from [`OpenApiDocument::paths`] on serialization.
    fields: Map<String, Value>,
    pub paths: Paths,
}

const PATHS_KEY: &str = "paths";

impl OpenApiDocument {
    pub fn new(paths: Paths) -> Self {
        Self {
            fields: Map::new(),
            paths,
        }
    }

    /// Any other root field (`openapi`, `info`, `components`...).
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == PATHS_KEY {
            return None;
        }
        self.fields.get(key)
    }
}

impl Serialize for OpenApiDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_slot = self.fields.contains_key(PATHS_KEY);
        let emit_trailing_paths = !has_slot && !self.paths.entries.is_empty();
        let len = self.fields.len() + usize::from(emit_trailing_paths);

        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.fields {
            if key == PATHS_KEY {
                map.serialize_entry(key, &self.paths)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        if emit_trailing_paths {
            map.serialize_entry(PATHS_KEY, &self.paths)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OpenApiDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = OpenApiDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an OpenAPI document object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<OpenApiDocument, A::Error> {
                let mut doc = OpenApiDocument::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key == PATHS_KEY {
                        doc.paths = map.next_value::<Option<Paths>>()?.unwrap_or_default();
                        doc.fields.insert(key, Value::Null);
                    } else {
                        let value = map.next_value()?;
                        doc.fields.insert(key, value);
                    }
                }
                Ok(doc)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
