//! Operation metadata: `operationId` → method and paths.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex_lite::Regex;
use routegen_manifest::{HttpMethod, InputSchema, Paths, SchemaSelection};

use crate::pipeline::Diagnostic;

const PHASE: &str = "metadata";

/// Upper bound on schema iterator advances while collecting paths.
pub const MAX_SCHEMA_ADVANCES: usize = 1024;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("path parameter pattern is valid"));

/// Rewrite an OpenAPI path template into framework style
/// (`/pets/{id}` → `/pets/:id`).
pub fn express_path(openapi_path: &str) -> String {
    PATH_PARAM.replace_all(openapi_path, ":$1").into_owned()
}

/// Normalized lookup key for an operation id or a path declaration name.
pub fn metadata_key(name: &str) -> String {
    name.to_lowercase()
}

/// Routing metadata for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMetadata {
    /// The operation id, verbatim.
    pub operation_id: String,
    pub method: HttpMethod,
    /// The path template as written in the document (`/pets/{id}`).
    pub openapi_path: String,
    /// The framework-style path (`/pets/:id`).
    pub express_path: String,
}

impl OperationMetadata {
    pub fn new(
        operation_id: impl Into<String>,
        method: HttpMethod,
        openapi_path: impl Into<String>,
    ) -> Self {
        let openapi_path = openapi_path.into();
        Self {
            operation_id: operation_id.into(),
            method,
            express_path: express_path(&openapi_path),
            openapi_path,
        }
    }

    /// The `(name, value)` pairs emitted as string-literal members, in order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("operationId", self.operation_id.as_str()),
            ("method", self.method.as_str()),
            ("expressPath", self.express_path.as_str()),
            ("openapiPath", self.openapi_path.as_str()),
        ]
    }
}

/// Operation metadata keyed by normalized operation id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTable {
    entries: IndexMap<String, OperationMetadata>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a `paths` map.
    ///
    /// Extensions of the paths object (`x-` keys) never yield records.
    /// Operations without an id are skipped with a warning; when two ids
    /// normalize to the same key the later operation wins.
    pub fn build(paths: &Paths, diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut table = Self::new();
        for (path, item) in paths.iter() {
            for (method, operation) in item.operations() {
                let location = format!("{} {}", method, path);
                let Some(operation_id) = operation.operation_id() else {
                    diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!("couldn't extract operationId for {} {}", method, path),
                        )
                        .at(location),
                    );
                    continue;
                };

                let record = OperationMetadata::new(operation_id, method, path.as_str());
                if let Some(previous) = table.insert(record) {
                    diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "operationId '{}' collides with '{}' ({} {}); keeping the later one",
                                operation_id,
                                previous.operation_id,
                                previous.method,
                                previous.openapi_path
                            ),
                        )
                        .at(location),
                    );
                }
            }
        }
        table
    }

    /// Drain the host's schema iterator and build the table from the paths
    /// it yields.
    pub fn from_schemas<I>(
        schemas: I,
        selection: SchemaSelection,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self
    where
        I: IntoIterator<Item = (String, InputSchema)>,
    {
        let paths = collect_paths(schemas, selection, diagnostics);
        Self::build(&paths, diagnostics)
    }

    /// Insert a record under its normalized key, returning the one it replaced.
    pub fn insert(&mut self, record: OperationMetadata) -> Option<OperationMetadata> {
        self.entries
            .insert(metadata_key(&record.operation_id), record)
    }

    /// Look up metadata by a path declaration name (or any spelling of an
    /// operation id).
    pub fn lookup(&self, name: &str) -> Option<&OperationMetadata> {
        self.entries.get(&metadata_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OperationMetadata> {
        self.entries.values()
    }
}

/// Collect the `paths` maps yielded by the host's schema iterator.
///
/// Inputs without a root schema or with empty paths are ignored. With
/// [`SchemaSelection::Merge`] every yielded map is accumulated and later
/// schemas replace identical path templates; with [`SchemaSelection::Last`]
/// only the last non-empty map is kept. At most [`MAX_SCHEMA_ADVANCES`]
/// values are consumed.
pub fn collect_paths<I>(
    schemas: I,
    selection: SchemaSelection,
    diagnostics: &mut Vec<Diagnostic>,
) -> Paths
where
    I: IntoIterator<Item = (String, InputSchema)>,
{
    let mut collected = Paths::new();
    let mut iter = schemas.into_iter();

    for _ in 0..MAX_SCHEMA_ADVANCES {
        let Some((_, schema)) = iter.next() else {
            return collected;
        };
        let Some(paths) = schema.paths() else {
            continue;
        };
        match selection {
            SchemaSelection::Merge => {
                collected.extend(paths.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            SchemaSelection::Last => collected = paths.clone(),
        }
    }

    if iter.next().is_some() {
        diagnostics.push(Diagnostic::warning(
            PHASE,
            format!(
                "schema iterator did not finish after {} values; ignoring the rest",
                MAX_SCHEMA_ADVANCES
            ),
        ));
    }
    collected
}
