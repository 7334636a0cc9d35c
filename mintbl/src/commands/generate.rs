use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use mintbl_manifest::{DEFAULT_MANIFEST_NAME, ManifestFile};

use super::{ResolverArgs, UnwrapOrExit};
use crate::{
    ops::{
        self,
        generate::{GenerateOptions, PlanFormat},
    },
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mintbl.toml (defaults to ./mintbl.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST_NAME)]
    pub config: PathBuf,

    /// Output file (Ninja defaults to <out_dir>/build.mintbl.ninja, JSON to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = PlanFormat::Ninja)]
    pub format: PlanFormat,

    #[command(flatten)]
    pub resolver: ResolverArgs,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let resolver = self.resolver.resolver(&file);

        let report = ops::generate(
            file.manifest(),
            resolver.as_ref(),
            GenerateOptions {
                root: self.resolver.root(&file),
                output: self.output.as_deref(),
                dry_run: self.dry_run,
                format: self.format,
            },
        )?;

        let mut out = TerminalOutput::new();
        report.render(&mut out);
        out.finish().wrap_err("Failed to write to stdout")
    }
}
