//! Inputs of the routegen plugin.
//!
//! - [`OpenApiDocument`] - the part of an OpenAPI document the plugin reads
//!   (`paths.<template>.<method>.operationId`), everything else kept verbatim
//! - [`SchemaDocument`], [`InputSchema`] - the envelopes the host passes to hooks
//! - [`PluginOption`], [`RawOptions`], [`Config`] - plugin configuration

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod openapi;
mod option;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use openapi::{HttpMethod, OpenApiDocument, Operation, PathItem, Paths};
pub use option::{
    Config, DEFAULT_ROUTE_TYPE_NAME, DESCRIPTOR_NAME, PlaceholderType, PluginOption, RawOptions,
    REQUEST_HANDLER, RouteTypeName, SchemaSelection,
};
pub use schema::{Format, InputSchema, SchemaDocument};
