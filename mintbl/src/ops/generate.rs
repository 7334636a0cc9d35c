//! Generate operation - build-graph emission.

use std::{fs, path::Path};

use clap::ValueEnum;
use eyre::{Context, Result};
use mintbl_graph::{
    BuildAction, InputResolver, NinjaWriter, PublishedArtifacts, RecordingRegistry, Registrar,
    WriteResult,
};
use mintbl_manifest::Manifest;
use serde::Serialize;
use tracing::info;

use crate::reports::{GenerateReport, GenerateResult};

/// File name of the Ninja file under the project's out dir.
pub const DEFAULT_NINJA_FILE: &str = "build.mintbl.ninja";

/// What `generate` emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// A Ninja build file
    Ninja,
    /// The registered actions and published artifacts as JSON
    Json,
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory module paths are relative to.
    pub root: &'a Path,
    /// Explicit destination. Ninja defaults to `<root>/<out_dir>/build.mintbl.ninja`;
    /// JSON is printed unless a destination is given.
    pub output: Option<&'a Path>,
    /// Print instead of writing.
    pub dry_run: bool,
    pub format: PlanFormat,
}

#[derive(Serialize)]
struct Plan<'a> {
    tool: &'a str,
    modules: Vec<ModulePlan<'a>>,
}

#[derive(Serialize)]
struct ModulePlan<'a> {
    name: &'a str,
    actions: Vec<BuildAction>,
    published: PublishedArtifacts,
}

/// Execute the generate operation.
///
/// Modules are registered in manifest order. The first module that fails
/// aborts the operation and nothing is written.
pub fn generate(
    manifest: &Manifest,
    resolver: &dyn InputResolver,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let registrar = Registrar::new(&manifest.project, resolver);
    match opts.format {
        PlanFormat::Ninja => generate_ninja(manifest, &registrar, &opts),
        PlanFormat::Json => generate_json(manifest, &registrar, &opts),
    }
}

fn generate_ninja(
    manifest: &Manifest,
    registrar: &Registrar,
    opts: &GenerateOptions,
) -> Result<GenerateReport> {
    let mut ninja = NinjaWriter::new(&manifest.project.tool);
    for (name, module) in &manifest.modules {
        let published = registrar.register(name, module, &mut ninja)?;
        info!(module = %name, outputs = published.outputs.len(), "registered module");
        ninja.add_phony(name.as_str(), &published.outputs);
    }

    let result = if opts.dry_run {
        GenerateResult::Printed {
            content: ninja.render()?,
        }
    } else {
        let path = opts.output.map(Path::to_path_buf).unwrap_or_else(|| {
            opts.root
                .join(&manifest.project.out_dir)
                .join(DEFAULT_NINJA_FILE)
        });
        let changed = ninja.write_to(&path)? == WriteResult::Written;
        GenerateResult::Written { path, changed }
    };

    Ok(GenerateReport {
        module_count: manifest.modules.len(),
        action_count: ninja.actions().count(),
        result,
    })
}

fn generate_json(
    manifest: &Manifest,
    registrar: &Registrar,
    opts: &GenerateOptions,
) -> Result<GenerateReport> {
    let mut modules = Vec::with_capacity(manifest.modules.len());
    for (name, module) in &manifest.modules {
        let mut registry = RecordingRegistry::new();
        let published = registrar.register(name, module, &mut registry)?;
        info!(module = %name, outputs = published.outputs.len(), "registered module");
        modules.push(ModulePlan {
            name: name.as_str(),
            actions: registry.into_actions(),
            published,
        });
    }

    let action_count = modules.iter().map(|m| m.actions.len()).sum();
    let plan = Plan {
        tool: &manifest.project.tool,
        modules,
    };
    let mut content = serde_json::to_string_pretty(&plan).wrap_err("Failed to encode plan")?;
    content.push('\n');

    let result = match opts.output.filter(|_| !opts.dry_run) {
        Some(path) => {
            write_file(path, &content)?;
            GenerateResult::Written {
                path: path.to_path_buf(),
                changed: true,
            }
        }
        None => GenerateResult::Printed { content },
    };

    Ok(GenerateReport {
        module_count: manifest.modules.len(),
        action_count,
        result,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use mintbl_graph::{SourceRoot, Unchecked};
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
        [modules.attrs]
        dir = "llvm/lib/IR"
        in = "Attributes.td"
        outs = ["Attributes.inc", "AttributesCompatFunc.inc"]

        [modules.directives]
        dir = "llvm/include/llvm/Frontend/OpenACC"
        in = "ACC.td"
        outs = ["ACC.h.inc", "ACC.inc"]
    "#;

    fn opts(root: &Path, format: PlanFormat, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            root,
            output: None,
            dry_run,
            format,
        }
    }

    #[test]
    fn test_generate_writes_default_ninja_file() {
        let temp = TempDir::new().unwrap();
        let manifest: Manifest = MANIFEST.parse().unwrap();

        let report = generate(
            &manifest,
            &Unchecked,
            opts(temp.path(), PlanFormat::Ninja, false),
        )
        .unwrap();

        let path = temp.path().join("out/build.mintbl.ninja");
        assert_eq!(report.module_count, 2);
        assert_eq!(report.action_count, 4);
        assert!(matches!(
            &report.result,
            GenerateResult::Written { path: written, changed: true } if *written == path
        ));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("build attrs: phony"));
        assert!(content.contains("build directives: phony"));

        let again = generate(
            &manifest,
            &Unchecked,
            opts(temp.path(), PlanFormat::Ninja, false),
        )
        .unwrap();
        assert!(matches!(again.result, GenerateResult::Written { changed: false, .. }));
    }

    #[test]
    fn test_generate_dry_run_prints() {
        let temp = TempDir::new().unwrap();
        let manifest: Manifest = MANIFEST.parse().unwrap();

        let report = generate(
            &manifest,
            &Unchecked,
            opts(temp.path(), PlanFormat::Ninja, true),
        )
        .unwrap();

        let GenerateResult::Printed { content } = &report.result else {
            panic!("expected printed output");
        };
        assert!(content.starts_with("# Generated by mintbl"));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_generate_json_plan() {
        let temp = TempDir::new().unwrap();
        let manifest: Manifest = MANIFEST.parse().unwrap();

        let report = generate(
            &manifest,
            &Unchecked,
            opts(temp.path(), PlanFormat::Json, false),
        )
        .unwrap();

        let GenerateResult::Printed { content } = &report.result else {
            panic!("expected printed output");
        };
        let plan: serde_json::Value = serde_json::from_str(content).unwrap();
        let attrs = &plan["modules"][0];
        assert_eq!(plan["tool"], "llvm-min-tblgen");
        assert_eq!(attrs["name"], "attrs");
        assert_eq!(attrs["actions"].as_array().unwrap().len(), 2);
        assert_eq!(
            attrs["published"]["include_dirs"],
            serde_json::json!(["out/.intermediates/llvm/lib/IR/attrs/gen"])
        );
        assert_eq!(
            attrs["actions"][0]["depfile"],
            "out/.intermediates/llvm/lib/IR/attrs/gen/Attributes.inc.d"
        );
    }

    #[test]
    fn test_generate_json_to_file() {
        let temp = TempDir::new().unwrap();
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let path = temp.path().join("plans/plan.json");

        let report = generate(
            &manifest,
            &Unchecked,
            GenerateOptions {
                output: Some(&path),
                ..opts(temp.path(), PlanFormat::Json, false)
            },
        )
        .unwrap();

        assert!(matches!(report.result, GenerateResult::Written { .. }));
        assert!(fs::read_to_string(&path).unwrap().contains("\"modules\""));
    }

    #[test]
    fn test_generate_refuses_module_named_like_a_file() {
        let temp = TempDir::new().unwrap();
        let manifest: Manifest = r#"
            [modules."Attributes.td"]
            in = "Attributes.td"
            outs = ["Attributes.inc"]
        "#
        .parse()
        .unwrap();

        let err = generate(
            &manifest,
            &Unchecked,
            opts(temp.path(), PlanFormat::Ninja, false),
        )
        .unwrap_err();

        assert!(err.to_string().contains("same name as a file"));
        assert!(!temp.path().join("out/build.mintbl.ninja").exists());
    }

    #[test]
    fn test_generate_stops_at_failing_module() {
        let temp = TempDir::new().unwrap();
        let manifest: Manifest = MANIFEST.parse().unwrap();

        let err = generate(
            &manifest,
            &SourceRoot::new(temp.path()),
            opts(temp.path(), PlanFormat::Ninja, false),
        )
        .unwrap_err();

        assert!(err.to_string().contains("module 'attrs'"));
        assert!(!temp.path().join("out/build.mintbl.ninja").exists());
    }
}
