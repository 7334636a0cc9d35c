use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mintbl_manifest::{DEFAULT_MANIFEST_NAME, ManifestFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to mintbl.toml (defaults to ./mintbl.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST_NAME)]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        ops::list(file.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
