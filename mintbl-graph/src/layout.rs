//! Output directory layout.

use std::path::{Component, Path, PathBuf};

/// Subdirectory of the out dir that holds per-module generated roots.
const INTERMEDIATES_DIR: &str = ".intermediates";

/// Allocates each module's generated-output root.
///
/// A module named `attrs` in `llvm/lib/IR` generates into
/// `<out_dir>/.intermediates/llvm/lib/IR/attrs/gen`. Including both the
/// directory and the name keeps roots of different modules disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    out_dir: PathBuf,
}

impl Layout {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// The generated-output root of a module.
    pub fn gen_dir(&self, module_name: &str, module_dir: &Path) -> PathBuf {
        clean(
            &self
                .out_dir
                .join(INTERMEDIATES_DIR)
                .join(module_dir)
                .join(module_name)
                .join("gen"),
        )
    }
}

/// Drop `.` components. An empty result becomes `.`.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
