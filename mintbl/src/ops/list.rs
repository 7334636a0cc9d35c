//! List operation - module overview.

use mintbl_core::classify;
use mintbl_manifest::Manifest;

use crate::reports::{ListReport, ModuleInfo, OutputInfo};

/// Describe every module and how each of its outputs would be generated.
///
/// Unlike registration this never fails: unrecognized outputs are reported
/// without flags.
pub fn list(manifest: &Manifest) -> ListReport {
    let modules = manifest
        .modules
        .iter()
        .map(|(name, module)| ModuleInfo {
            name: name.clone(),
            dir: module.dir.clone(),
            input: module.input.clone(),
            outputs: module
                .outputs
                .iter()
                .map(|output| OutputInfo {
                    name: output.clone(),
                    flags: classify(output).ok().map(|inv| inv.to_string()),
                })
                .collect(),
        })
        .collect();

    ListReport {
        tool: manifest.project.tool.clone(),
        modules,
    }
}
