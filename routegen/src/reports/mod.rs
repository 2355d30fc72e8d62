//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod diagnostics;
mod ensure_ids;
mod generate;
mod info;
mod output;

pub use check::CheckReport;
pub use ensure_ids::EnsureIdsReport;
pub use generate::GenerateReport;
pub use info::InfoReport;
pub use output::{Report, TerminalOutput};
