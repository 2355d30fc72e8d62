//! Core operations.
//!
//! This module contains the business logic for routegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod ensure_ids;
pub mod generate;
pub mod info;

pub use check::check;
pub use ensure_ids::ensure_ids;
pub use generate::{TreeFormat, generate};
pub use info::info;
