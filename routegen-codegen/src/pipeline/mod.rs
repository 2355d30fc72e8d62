//! Route synthesis pipeline.
//!
//! A [`Pipeline`] chains the plugin hooks over a [`CompilationContext`] the
//! way a host would drive them:
//!
//! - pre-process: fill in missing operation ids
//! - metadata: resolve configuration and build the operation metadata table
//! - rewrite: apply the transform to the declaration tree
//!
//! # Example
//!
//! ```ignore
//! use routegen_codegen::pipeline::{CompilationContext, Pipeline};
//!
//! let ctx = CompilationContext::new(option, schemas).with_tree(tree);
//! let ctx = Pipeline::new().run(ctx)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
