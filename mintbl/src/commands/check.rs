use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mintbl_manifest::{DEFAULT_MANIFEST_NAME, ManifestFile};
use tracing::info;

use super::{ResolverArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mintbl.toml (defaults to ./mintbl.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST_NAME)]
    pub config: PathBuf,

    #[command(flatten)]
    pub resolver: ResolverArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let resolver = self.resolver.resolver(&file);

        info!(config = %self.config.display(), "checking manifest");
        let report = ops::check(file.manifest(), &self.config, resolver.as_ref());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
