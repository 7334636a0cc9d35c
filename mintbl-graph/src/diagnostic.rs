//! Findings of a manifest check.
//!
//! A finding names the module, the manifest value it is about and a stable
//! code, so callers can point at the exact `in` or `outs` entry.

use std::fmt;

use serde::Serialize;

use crate::RegisterError;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The module cannot be registered.
    Error,
    /// The module registers, but probably not as intended.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// The manifest value a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "key", content = "value", rename_all = "lowercase")]
pub enum Subject {
    /// The module table as a whole.
    Module,
    /// The module's `in` value.
    Input(String),
    /// One entry of the module's `outs`.
    Output(String),
}

/// A finding attributed to one module.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable identifier, e.g. `mintbl::unrecognized_output`.
    pub code: String,
    pub module: String,
    pub subject: Subject,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(
        code: &str,
        module: &str,
        subject: Subject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            module: module.to_string(),
            subject,
            message: message.into(),
        }
    }

    pub fn error(code: &str, module: &str, subject: Subject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::warning(code, module, subject, message)
        }
    }

    /// Manifest key the finding points at, with the offending value.
    ///
    /// `modules.attrs`, `modules.attrs.in: "Attributes.td"` or
    /// `modules.attrs.outs: "Unknown.inc"`.
    pub fn location(&self) -> String {
        match &self.subject {
            Subject::Module => format!("modules.{}", self.module),
            Subject::Input(input) => format!("modules.{}.in: \"{}\"", self.module, input),
            Subject::Output(output) => format!("modules.{}.outs: \"{}\"", self.module, output),
        }
    }
}

impl From<&RegisterError> for Diagnostic {
    fn from(err: &RegisterError) -> Self {
        let code = miette::Diagnostic::code(err)
            .map(|code| code.to_string())
            .unwrap_or_default();
        Self::error(&code, err.module(), err.subject(), err.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} (at {})",
            self.severity,
            self.code,
            self.message,
            self.location()
        )
    }
}
