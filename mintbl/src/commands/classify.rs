use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ClassifyCommand {
    /// Output file names (directories are ignored)
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl ClassifyCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::classify(&self.names);
        report.render(&mut TerminalOutput::new());

        if report.has_unrecognized() {
            std::process::exit(1);
        }
        Ok(())
    }
}
