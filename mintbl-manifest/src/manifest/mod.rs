//! Manifest types and parsing for mintbl.toml files.

mod file;
mod module;
mod parse;
mod project;
mod validate;

use indexmap::IndexMap;
pub use file::ManifestFile;
pub use module::ModuleSpec;
pub use parse::{DEFAULT_MANIFEST_NAME, parse_manifest};
pub use project::{DEFAULT_INCLUDE_ROOTS, DEFAULT_OUT_DIR, DEFAULT_TOOL, ProjectConfig};
use serde::{Deserialize, Serialize};
pub use validate::{ParseContext, path_problem};

/// Root manifest for mintbl.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide generator settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Generator modules, in declaration order
    #[serde(default)]
    pub modules: IndexMap<String, ModuleSpec>,
}

impl Manifest {
    /// Look up a module by name.
    pub fn module(&self, name: &str) -> Option<&ModuleSpec> {
        self.modules.get(name)
    }

    /// Total number of declared outputs across all modules.
    pub fn output_count(&self) -> usize {
        self.modules.values().map(|m| m.outputs.len()).sum()
    }
}
