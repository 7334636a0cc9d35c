use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ModesCommand {}

impl ModesCommand {
    pub fn run(&self) -> Result<()> {
        ops::modes().render(&mut TerminalOutput::new());
        Ok(())
    }
}
