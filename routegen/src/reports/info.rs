//! Info command report data structures.

use routegen_codegen::PluginMeta;

use super::output::{Output, Report};

/// Report data describing the plugin.
#[derive(Debug)]
pub struct InfoReport {
    pub meta: PluginMeta,
    /// Pipeline phases, in execution order.
    pub phases: Vec<(&'static str, &'static str)>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.meta.to_string());
        out.preformatted(self.meta.description);
        out.newline();

        out.section("Phases");
        for (name, description) in &self.phases {
            out.key_value_indented(name, description);
        }
    }
}
