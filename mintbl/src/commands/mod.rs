mod check;
mod classify;
mod completions;
mod generate;
mod list;
mod modes;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use classify::ClassifyCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use mintbl_graph::{InputResolver, SourceRoot, Unchecked};
use mintbl_manifest::ManifestFile;
use modes::ModesCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mintbl_manifest::Result<T> {
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

#[derive(Parser)]
#[command(name = "mintbl")]
#[command(version)]
#[command(about = "Plan LLVM min-tablegen build actions from mintbl.toml")]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Classify(cmd) => cmd.run(),
            Commands::Modes(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate mintbl.toml without writing anything
    Check(CheckCommand),

    /// Write the Ninja build file for every module
    Generate(GenerateCommand),

    /// List modules and the generator flags of their outputs
    List(ListCommand),

    /// Show the generator invocation for output file names
    Classify(ClassifyCommand),

    /// List every output name the generator can produce
    Modes(ModesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// How module inputs are located.
#[derive(Args)]
pub struct ResolverArgs {
    /// Directory module paths are relative to (defaults to the manifest's directory)
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    /// Trust declared inputs without checking that they exist
    #[arg(long, conflicts_with = "source_root")]
    pub skip_input_check: bool,
}

impl ResolverArgs {
    pub fn resolver(&self, file: &ManifestFile) -> Box<dyn InputResolver> {
        if self.skip_input_check {
            return Box::new(Unchecked);
        }
        Box::new(SourceRoot::new(self.root(file)))
    }

    /// Directory generated paths are relative to.
    pub fn root<'a>(&'a self, file: &'a ManifestFile) -> &'a Path {
        self.source_root
            .as_deref()
            .unwrap_or_else(|| file.source_root())
    }
}
