//! Generator invocation descriptors.

use std::fmt;

use serde::Serialize;

/// A code-generation mode of the generator tool.
///
/// Each mode corresponds to exactly one command-line flag. Note that the
/// directive and value-type modes use the double-dash spelling; the tool
/// accepts both, but the flags are reproduced exactly as the build has
/// always passed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Attrs,
    IntrinsicEnums,
    IntrinsicImpl,
    DirectiveDecl,
    DirectiveImpl,
    ValueTypes,
    RiscvTargetDef,
}

impl Mode {
    /// All modes, in catalog order.
    pub const ALL: [Mode; 7] = [
        Mode::Attrs,
        Mode::IntrinsicEnums,
        Mode::IntrinsicImpl,
        Mode::DirectiveDecl,
        Mode::DirectiveImpl,
        Mode::ValueTypes,
        Mode::RiscvTargetDef,
    ];

    /// The command-line flag selecting this mode.
    pub fn flag(&self) -> &'static str {
        match self {
            Mode::Attrs => "-gen-attrs",
            Mode::IntrinsicEnums => "-gen-intrinsic-enums",
            Mode::IntrinsicImpl => "-gen-intrinsic-impl",
            Mode::DirectiveDecl => "--gen-directive-decl",
            Mode::DirectiveImpl => "--gen-directive-impl",
            Mode::ValueTypes => "--gen-vt",
            Mode::RiscvTargetDef => "-gen-riscv-target-def",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// The result of classifying one output: a mode plus any extra flags.
///
/// Displays as the space-joined flag sequence passed to the tool, e.g.
/// `-gen-intrinsic-enums -intrinsic-prefix=aarch64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratorInvocation {
    pub mode: Mode,
    pub extra_flags: Vec<String>,
}

impl GeneratorInvocation {
    /// Create an invocation with no extra flags.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            extra_flags: Vec::new(),
        }
    }

    /// Add an extra flag after the mode flag.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.extra_flags.push(flag.into());
        self
    }

    /// The flags in command-line order: mode first, then extras.
    pub fn args(&self) -> Vec<String> {
        std::iter::once(self.mode.flag().to_string())
            .chain(self.extra_flags.iter().cloned())
            .collect()
    }
}

impl fmt::Display for GeneratorInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode)?;
        for flag in &self.extra_flags {
            write!(f, " {}", flag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags_keep_their_dash_style() {
        assert_eq!(Mode::Attrs.flag(), "-gen-attrs");
        assert_eq!(Mode::DirectiveDecl.flag(), "--gen-directive-decl");
        assert_eq!(Mode::ValueTypes.flag(), "--gen-vt");
    }

    #[test]
    fn test_invocation_display_without_extras() {
        let inv = GeneratorInvocation::new(Mode::IntrinsicImpl);
        assert_eq!(inv.to_string(), "-gen-intrinsic-impl");
        assert_eq!(inv.args(), vec!["-gen-intrinsic-impl"]);
    }

    #[test]
    fn test_invocation_display_with_extras() {
        let inv = GeneratorInvocation::new(Mode::IntrinsicEnums).with_flag("-intrinsic-prefix=bpf");
        assert_eq!(inv.to_string(), "-gen-intrinsic-enums -intrinsic-prefix=bpf");
        assert_eq!(
            inv.args(),
            vec!["-gen-intrinsic-enums", "-intrinsic-prefix=bpf"]
        );
    }

    #[test]
    fn test_mode_serializes_kebab_case() {
        let json = serde_json::to_string(&Mode::RiscvTargetDef).unwrap();
        assert_eq!(json, "\"riscv-target-def\"");
    }
}
