//! Host build-system collaborators.
//!
//! The registrar never talks to a build system directly. It asks an
//! [`InputResolver`] where the input lives and hands finished actions to an
//! [`ActionRegistry`]. Hosts (or tests) plug in their own implementations.

use std::path::{Path, PathBuf};

use crate::{
    action::{BuildAction, Rule},
    layout::clean,
};

/// Locates a module's declared input in the source tree.
pub trait InputResolver {
    /// Resolve `input`, relative to `module_dir`, to a source-root-relative
    /// path. Returns `None` if the input can't be found.
    fn resolve(&self, module_dir: &Path, input: &str) -> Option<PathBuf>;
}

/// Receives build actions from the registrar.
pub trait ActionRegistry {
    /// Register one action, built from the given rule.
    fn register(&mut self, rule: &Rule, action: BuildAction);
}

/// Resolves inputs against a source tree on disk.
#[derive(Debug, Clone)]
pub struct SourceRoot {
    root: PathBuf,
}

impl SourceRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl InputResolver for SourceRoot {
    fn resolve(&self, module_dir: &Path, input: &str) -> Option<PathBuf> {
        let relative = clean(&module_dir.join(input));
        self.root.join(&relative).is_file().then_some(relative)
    }
}

/// Trusts declarations without touching the filesystem.
///
/// Useful when planning outside a full checkout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchecked;

impl InputResolver for Unchecked {
    fn resolve(&self, module_dir: &Path, input: &str) -> Option<PathBuf> {
        Some(clean(&module_dir.join(input)))
    }
}

/// Keeps every registered action in memory, in registration order.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    actions: Vec<BuildAction>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[BuildAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<BuildAction> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl ActionRegistry for RecordingRegistry {
    fn register(&mut self, _rule: &Rule, action: BuildAction) {
        self.actions.push(action);
    }
}
