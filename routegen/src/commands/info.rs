use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        ops::info().render(&mut TerminalOutput::new());
        Ok(())
    }
}
