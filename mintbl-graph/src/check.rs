//! Whole-manifest validation.
//!
//! Registers every module into a throwaway registry and turns failures into
//! diagnostics, so every broken module is reported in one pass.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use mintbl_core::base_name;
use mintbl_manifest::Manifest;
use tracing::info;

use crate::{Diagnostic, InputResolver, RecordingRegistry, Registrar, Severity, Subject};

/// Outcome of checking a manifest.
#[derive(Debug, Default)]
pub struct CheckResult {
    /// Number of modules checked.
    pub module_count: usize,
    /// Number of build actions that registered successfully.
    pub action_count: usize,
    /// Diagnostics collected across all modules.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Get all diagnostics of the given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

/// Check every module of a manifest.
pub fn check_manifest(manifest: &Manifest, resolver: &dyn InputResolver) -> CheckResult {
    let registrar = Registrar::new(&manifest.project, resolver);
    let mut result = CheckResult {
        module_count: manifest.modules.len(),
        ..CheckResult::default()
    };

    // base name -> first module generating it
    let mut generated_by: HashMap<&str, &str> = HashMap::new();
    // every input and output of the graph
    let mut files: HashSet<PathBuf> = HashSet::new();

    for (name, module) in &manifest.modules {
        if module.outputs.is_empty() {
            result.diagnostics.push(Diagnostic::warning(
                "mintbl::empty_module",
                name,
                Subject::Module,
                format!("module '{}' declares no outputs", name),
            ));
        }

        let mut registry = RecordingRegistry::new();
        if let Err(err) = registrar.register(name, module, &mut registry) {
            result.diagnostics.push(Diagnostic::from(&err));
        }
        result.action_count += registry.len();
        for action in registry.into_actions() {
            files.insert(action.input);
            files.insert(action.output);
        }

        for output in &module.outputs {
            let Some(file) = base_name(output) else {
                continue;
            };
            match generated_by.get(file) {
                Some(other) if *other != name.as_str() => {
                    result.diagnostics.push(Diagnostic::warning(
                        "mintbl::shared_output",
                        name,
                        Subject::Output(output.clone()),
                        format!("output '{}' is also generated by module '{}'", file, other),
                    ));
                }
                Some(_) => {}
                None => {
                    generated_by.insert(file, name);
                }
            }
        }
    }

    // A module's name becomes a build target, so it can't also be a file.
    for name in manifest.modules.keys() {
        if files.contains(Path::new(name.as_str())) {
            result.diagnostics.push(Diagnostic::error(
                "mintbl::name_collision",
                name,
                Subject::Module,
                format!("module name '{}' is also a file in the build graph", name),
            ));
        }
    }

    info!(
        modules = result.module_count,
        actions = result.action_count,
        errors = result.error_count(),
        "checked manifest"
    );
    result
}
