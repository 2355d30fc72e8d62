//! Info operation - describes the plugin and its pipeline.

use routegen_codegen::{RoutePlugin, pipeline::Pipeline};

use crate::reports::InfoReport;

/// Execute the info operation.
pub fn info() -> InfoReport {
    InfoReport {
        meta: RoutePlugin::new().meta(),
        phases: Pipeline::new().describe(),
    }
}
