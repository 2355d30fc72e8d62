use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use routegen_manifest::SchemaDocument;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct EnsureIdsCommand {
    /// OpenAPI document (JSON or YAML)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Write the completed document (JSON) to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List every synthesized operationId
    #[arg(short, long)]
    pub verbose: bool,
}

impl EnsureIdsCommand {
    pub fn run(&self) -> Result<()> {
        let schema = SchemaDocument::from_file(&self.schema).unwrap_or_exit();

        let mut report = ops::ensure_ids(schema)?;
        report.verbose = self.verbose;

        if let Some(path) = &self.output {
            fs::write(path, &report.content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            report.output_path = Some(path.clone());
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
