use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid module name error.
    pub fn invalid_module_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidModuleName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid output error.
    pub fn invalid_output_error(
        &self,
        module: impl Into<String>,
        output: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidOutput {
            src: self.named_source(),
            span,
            module: module.into(),
            output: output.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate output error.
    pub fn duplicate_output_error(
        &self,
        module: impl Into<String>,
        output: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateOutput {
            src: self.named_source(),
            first_span,
            second_span,
            module: module.into(),
            output: output.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(mintbl::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(mintbl::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid module name '{name}'")]
    #[diagnostic(
        code(mintbl::invalid_module_name),
        help("{reason}. Use only letters, numbers, '_', '-' and '.'.")
    )]
    InvalidModuleName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid module name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid output '{output}' in module '{module}'")]
    #[diagnostic(
        code(mintbl::invalid_output),
        help("{reason}. Outputs are file names relative to the module's generated directory.")
    )]
    InvalidOutput {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid output")]
        span: Option<SourceSpan>,
        module: String,
        output: String,
        reason: String,
    },

    #[error("duplicate output '{output}' in module '{module}'")]
    #[diagnostic(
        code(mintbl::duplicate_output),
        help("each output may be listed once; remove the second entry")
    )]
    DuplicateOutput {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: Option<SourceSpan>,
        #[label("listed again here")]
        second_span: Option<SourceSpan>,
        module: String,
        output: String,
    },
}
