use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single generator module: one input, any number of outputs.
///
/// ```toml
/// [modules.llvm-gen-intrinsics]
/// dir = "llvm/include/llvm/IR"
/// in = "Intrinsics.td"
/// outs = ["IntrinsicEnums.inc", "IntrinsicImpl.inc"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSpec {
    /// Module directory, relative to the source root
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Input file, relative to the module directory
    #[serde(rename = "in")]
    pub input: String,

    /// Requested output file names, in order
    #[serde(rename = "outs", default)]
    pub outputs: Vec<String>,
}

impl ModuleSpec {
    pub fn new(
        dir: impl Into<PathBuf>,
        input: impl Into<String>,
        outputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            dir: dir.into(),
            input: input.into(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}
