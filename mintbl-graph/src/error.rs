use std::path::PathBuf;

use miette::Diagnostic;
use mintbl_core::ClassifyError;
use thiserror::Error;

use crate::Subject;

pub type Result<T> = std::result::Result<T, RegisterError>;

/// Errors that abort registration of a module.
///
/// Every variant names the module it came from. None of them are transient:
/// they describe a build declaration that cannot be turned into a graph.
#[derive(Debug, Error, Diagnostic)]
pub enum RegisterError {
    #[error("module '{module}' requests output '{output}' that no generator mode produces")]
    #[diagnostic(
        code(mintbl::unrecognized_output),
        help("run 'mintbl modes' to list the output names the generator can produce")
    )]
    UnrecognizedOutput {
        module: String,
        output: String,
        #[source]
        source: ClassifyError,
    },

    #[error("module '{module}' cannot locate input '{input}': {reason}")]
    #[diagnostic(
        code(mintbl::unresolved_path),
        help("'in' is relative to the module's 'dir' and must exist in the source tree")
    )]
    UnresolvedPath {
        module: String,
        input: String,
        path: PathBuf,
        reason: String,
    },

    #[error("module '{module}' has invalid output '{output}': {reason}")]
    #[diagnostic(code(mintbl::invalid_output))]
    InvalidOutput {
        module: String,
        output: String,
        reason: String,
    },
}

impl RegisterError {
    /// The module the error is attributed to.
    pub fn module(&self) -> &str {
        match self {
            Self::UnrecognizedOutput { module, .. }
            | Self::UnresolvedPath { module, .. }
            | Self::InvalidOutput { module, .. } => module,
        }
    }

    /// The manifest value the error is about.
    pub fn subject(&self) -> Subject {
        match self {
            Self::UnresolvedPath { input, .. } => Subject::Input(input.clone()),
            Self::UnrecognizedOutput { output, .. } | Self::InvalidOutput { output, .. } => {
                Subject::Output(output.clone())
            }
        }
    }
}
