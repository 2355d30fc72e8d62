use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, load_schemas, options::OptionArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// OpenAPI documents (JSON or YAML), in the order the host yields them
    #[arg(short, long = "schema")]
    pub schemas: Vec<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Also show informational diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let option = self.options.load().unwrap_or_exit();
        let schemas = load_schemas(&self.schemas).unwrap_or_exit();
        let source = self
            .options
            .config_path()
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());

        let mut report = ops::check(option, schemas, source)?;
        report.verbose = self.verbose;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
