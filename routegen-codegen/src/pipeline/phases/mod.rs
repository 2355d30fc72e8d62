//! Built-in pipeline phases.
//!
//! - [`EnsureIdsPhase`] - fills in missing operation ids
//! - [`MetadataPhase`] - resolves configuration and builds the metadata table
//! - [`RewritePhase`] - rewrites the declaration tree

mod ensure_ids;
mod metadata;
mod rewrite;

pub use ensure_ids::EnsureIdsPhase;
pub use metadata::MetadataPhase;
pub use rewrite::RewritePhase;
