//! Route descriptor synthesis for OpenAPI-derived declaration trees.
//!
//! Given a declaration tree whose `Paths` namespace holds one namespace per
//! API path, this crate appends to each path a `Config` interface describing
//! the route (operation id, method, paths, parameter and response types) and
//! optionally a `RequestHandler<...>` alias for it.
//!
//! # Module Organization
//!
//! - [`locate`] - declaration lookup within a namespace body
//! - [`category`] - the six parameter categories of a path
//! - [`resolve`] - type reference synthesis per category
//! - [`metadata`] - the operation metadata table
//! - [`rewrite`] - rewriting of a single path declaration
//! - [`transform`] - the tree walker
//! - [`preprocess`] - operation id synthesis
//! - [`plugin`] - the host-facing plugin surface
//! - [`pipeline`] - phases chaining the hooks, and diagnostics

pub mod category;
pub mod locate;
pub mod metadata;
pub mod pipeline;
pub mod plugin;
pub mod preprocess;
pub mod resolve;
pub mod rewrite;
pub mod transform;

pub use category::ParameterCategory;
pub use metadata::{MetadataTable, OperationMetadata};
pub use pipeline::{Diagnostic, Severity};
pub use plugin::{PluginContext, PluginMeta, RoutePlugin};
pub use transform::RouteTransformer;
