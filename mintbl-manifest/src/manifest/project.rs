use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Generator binary used when the manifest doesn't name one.
pub const DEFAULT_TOOL: &str = "llvm-min-tblgen";

/// Root for generated files when the manifest doesn't name one.
pub const DEFAULT_OUT_DIR: &str = "out";

/// Include roots searched between the module directory and the input's own
/// directory.
pub const DEFAULT_INCLUDE_ROOTS: [&str; 2] = [
    "external/llvm-project/llvm/include",
    "external/llvm-project/llvm/lib/Target",
];

/// Project-wide generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Generator tool invoked by every build action
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Directory under which each module gets its generated-output root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Fixed include roots, in search order
    #[serde(default = "default_include_roots")]
    pub include_roots: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            out_dir: default_out_dir(),
            include_roots: default_include_roots(),
        }
    }
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

fn default_include_roots() -> Vec<String> {
    DEFAULT_INCLUDE_ROOTS.iter().map(|s| s.to_string()).collect()
}
