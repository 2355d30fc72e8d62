use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use routegen_ast::SourceTree;

use super::{UnwrapOrExit, load_schemas, options::OptionArgs};
use crate::{
    ops::{self, TreeFormat},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Declaration tree produced by the host generator (JSON)
    #[arg(short, long)]
    pub tree: PathBuf,

    /// OpenAPI documents (JSON or YAML), in the order the host yields them
    #[arg(short, long = "schema", required = true)]
    pub schemas: Vec<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the rewritten tree as JSON instead of declarations
    #[arg(long)]
    pub json: bool,

    /// Also show informational diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let option = self.options.load().unwrap_or_exit();
        let schemas = load_schemas(&self.schemas).unwrap_or_exit();

        let src = fs::read_to_string(&self.tree)
            .wrap_err_with(|| format!("Failed to read {}", self.tree.display()))?;
        let tree = SourceTree::from_json(&src)
            .wrap_err_with(|| format!("Failed to parse declaration tree {}", self.tree.display()))?;

        let format = if self.json {
            TreeFormat::Json
        } else {
            TreeFormat::Declarations
        };
        let mut report = ops::generate(option, schemas, tree, format)?;
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
