//! Check operation - manifest validation.

use std::path::Path;

use mintbl_graph::{InputResolver, Severity, check_manifest};
use mintbl_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Registers every module into a recording registry and collects the
/// diagnostics of all modules.
pub fn check(manifest: &Manifest, config_path: &Path, resolver: &dyn InputResolver) -> CheckReport {
    let result = check_manifest(manifest, resolver);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in &result.diagnostics {
        let msg = format!("{}\n  --> {}", diag.message, diag.location());

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        module_count: result.module_count,
        action_count: result.action_count,
        errors,
        warnings,
    }
}
