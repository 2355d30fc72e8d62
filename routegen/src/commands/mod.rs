mod check;
mod completions;
mod ensure_ids;
mod generate;
mod info;
mod options;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use ensure_ids::EnsureIdsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use routegen_manifest::SchemaDocument;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for routegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load every schema document, in command-line order.
fn load_schemas(paths: &[PathBuf]) -> routegen_manifest::Result<Vec<SchemaDocument>> {
    paths.iter().map(|path| SchemaDocument::from_file(path)).collect()
}

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version)]
#[command(about = "Append typed route descriptors to OpenAPI-derived declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::EnsureIds(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a declaration tree, appending route descriptors
    Generate(GenerateCommand),

    /// Fill in missing operationIds of an OpenAPI document
    EnsureIds(EnsureIdsCommand),

    /// Validate options and list the operation metadata
    Check(CheckCommand),

    /// Show plugin information
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
