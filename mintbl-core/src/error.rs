use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ClassifyError {
    #[error("couldn't map output file '{name}' to a generator")]
    #[diagnostic(
        code(mintbl::unrecognized_output),
        help("run 'mintbl modes' to list the output names the generator can produce")
    )]
    UnrecognizedOutput { name: String },
}

impl ClassifyError {
    pub(crate) fn unrecognized(name: impl Into<String>) -> Self {
        Self::UnrecognizedOutput { name: name.into() }
    }

    /// The output name that failed to classify.
    pub fn name(&self) -> &str {
        match self {
            Self::UnrecognizedOutput { name } => name,
        }
    }
}
