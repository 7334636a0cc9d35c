//! Per-module build-action registration.

use std::{collections::HashSet, path::PathBuf};

use mintbl_core::classify;
use mintbl_manifest::{ModuleSpec, ProjectConfig, path_problem};
use serde::Serialize;
use tracing::debug;

use crate::{
    ActionRegistry, InputResolver, Layout, RegisterError, Result,
    action::{BuildAction, IncludeSet, TBLGEN_RULE},
    layout::clean,
};

/// What a module exposes to downstream consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishedArtifacts {
    /// Generated files, one per requested output, in request order.
    pub outputs: Vec<PathBuf>,
    /// Directories consumers add to their include path.
    pub include_dirs: Vec<PathBuf>,
}

/// Turns modules into build actions.
///
/// A registrar is cheap to build and holds no per-module state, so one
/// instance can serve every module of a project. Each call to
/// [`register`](Self::register) is expected to happen once per module per
/// graph evaluation; calling it twice registers the actions twice.
pub struct Registrar<'a> {
    tool: &'a str,
    include_roots: &'a [String],
    layout: Layout,
    resolver: &'a dyn InputResolver,
}

impl<'a> Registrar<'a> {
    pub fn new(project: &'a ProjectConfig, resolver: &'a dyn InputResolver) -> Self {
        Self {
            tool: &project.tool,
            include_roots: &project.include_roots,
            layout: Layout::new(&project.out_dir),
            resolver,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Register one build action per output of `module`.
    ///
    /// Outputs are processed in order. The first failure stops registration
    /// and is returned; actions registered before it are not withdrawn.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::UnresolvedPath`] if the input can't be located
    /// - [`RegisterError::InvalidOutput`] if an output would land outside the
    ///   module's generated root, or on the same file as an earlier output
    /// - [`RegisterError::UnrecognizedOutput`] if an output matches no
    ///   generator mode
    pub fn register(
        &self,
        name: &str,
        module: &ModuleSpec,
        registry: &mut dyn ActionRegistry,
    ) -> Result<PublishedArtifacts> {
        let input = self.resolve_input(name, module)?;
        let includes = IncludeSet::new(&module.dir, self.include_roots, &input);
        let gen_dir = self.layout.gen_dir(name, &module.dir);

        let mut published = PublishedArtifacts::default();
        let mut seen = HashSet::new();

        for output in &module.outputs {
            if let Some(reason) = path_problem(output) {
                return Err(RegisterError::InvalidOutput {
                    module: name.to_string(),
                    output: output.clone(),
                    reason: reason.to_string(),
                });
            }

            let out = clean(&gen_dir.join(output));
            if !seen.insert(out.clone()) {
                return Err(RegisterError::InvalidOutput {
                    module: name.to_string(),
                    output: output.clone(),
                    reason: "resolves to the same file as an earlier output".to_string(),
                });
            }

            let invocation =
                classify(output).map_err(|source| RegisterError::UnrecognizedOutput {
                    module: name.to_string(),
                    output: output.clone(),
                    source,
                })?;

            debug!(
                module = name,
                output = %out.display(),
                generator = %invocation,
                "registering build action"
            );

            let action = BuildAction::new(
                name,
                self.tool,
                input.clone(),
                out.clone(),
                invocation,
                includes.clone(),
            );
            registry.register(&TBLGEN_RULE, action);
            published.outputs.push(out);
        }

        published.include_dirs.push(gen_dir);
        Ok(published)
    }

    fn resolve_input(&self, name: &str, module: &ModuleSpec) -> Result<PathBuf> {
        let unresolved = |reason: &str| RegisterError::UnresolvedPath {
            module: name.to_string(),
            input: module.input.clone(),
            path: module.dir.join(&module.input),
            reason: reason.to_string(),
        };

        if let Some(reason) = path_problem(&module.input) {
            return Err(unresolved(reason));
        }
        if let Some(reason) = path_problem(&module.dir.to_string_lossy()) {
            return Err(unresolved(reason));
        }

        self.resolver
            .resolve(&module.dir, &module.input)
            .ok_or_else(|| unresolved("not found in the source tree"))
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use mintbl_core::Mode;
    use tempfile::TempDir;

    use super::*;
    use crate::{RecordingRegistry, SourceRoot, Unchecked};

    fn project() -> ProjectConfig {
        ProjectConfig::default()
    }

    fn ir_module(outputs: &[&str]) -> ModuleSpec {
        ModuleSpec::new("llvm/lib/IR", "Attributes.td", outputs.iter().copied())
    }

    #[test]
    fn test_empty_outputs_register_nothing() {
        let project = project();
        let mut registry = RecordingRegistry::new();

        let published = Registrar::new(&project, &Unchecked)
            .register("attrs", &ir_module(&[]), &mut registry)
            .unwrap();

        assert!(registry.is_empty());
        assert!(published.outputs.is_empty());
        assert_eq!(
            published.include_dirs,
            vec![PathBuf::from("out/.intermediates/llvm/lib/IR/attrs/gen")]
        );
    }

    #[test]
    fn test_two_outputs_register_two_actions() {
        let project = project();
        let mut registry = RecordingRegistry::new();
        let registrar = Registrar::new(&project, &Unchecked);

        let published = registrar
            .register(
                "gen",
                &ir_module(&["Attributes.inc", "IntrinsicEnums.inc"]),
                &mut registry,
            )
            .unwrap();

        let actions = registry.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].includes, actions[1].includes);
        assert_eq!(actions[0].invocation.mode, Mode::Attrs);
        assert_eq!(actions[1].invocation.mode, Mode::IntrinsicEnums);

        let gen_root = registrar.layout().gen_dir("gen", Path::new("llvm/lib/IR"));
        for action in actions {
            assert!(action.output.starts_with(&gen_root));
            assert_eq!(action.input, PathBuf::from("llvm/lib/IR/Attributes.td"));
        }

        assert_eq!(
            published.outputs,
            actions.iter().map(|a| a.output.clone()).collect::<Vec<_>>()
        );
        assert_eq!(published.include_dirs, vec![gen_root]);
    }

    #[test]
    fn test_include_set_order_and_command() {
        let project = project();
        let mut registry = RecordingRegistry::new();

        Registrar::new(&project, &Unchecked)
            .register("attrs", &ir_module(&["Attributes.inc"]), &mut registry)
            .unwrap();

        let action = &registry.actions()[0];
        assert_eq!(
            action.command_line(),
            "llvm-min-tblgen \
             -I llvm/lib/IR \
             -I external/llvm-project/llvm/include \
             -I external/llvm-project/llvm/lib/Target \
             -I llvm/lib/IR \
             -gen-attrs \
             -d out/.intermediates/llvm/lib/IR/attrs/gen/Attributes.inc.d \
             -o out/.intermediates/llvm/lib/IR/attrs/gen/Attributes.inc \
             llvm/lib/IR/Attributes.td"
        );
    }

    #[test]
    fn test_include_set_is_stable_across_calls() {
        let project = project();
        let module = ir_module(&["Attributes.inc"]);
        let registrar = Registrar::new(&project, &Unchecked);

        let mut first = RecordingRegistry::new();
        let mut second = RecordingRegistry::new();
        registrar.register("attrs", &module, &mut first).unwrap();
        registrar.register("attrs", &module, &mut second).unwrap();

        assert_eq!(
            first.actions()[0].includes.flags(),
            second.actions()[0].includes.flags()
        );
    }

    #[test]
    fn test_input_in_subdirectory_is_searched_last() {
        let project = project();
        let mut registry = RecordingRegistry::new();
        let module = ModuleSpec::new("llvm", "include/llvm/IR/Intrinsics.td", ["IntrinsicImpl.inc"]);

        Registrar::new(&project, &Unchecked)
            .register("intrinsics", &module, &mut registry)
            .unwrap();

        let dirs = registry.actions()[0].includes.dirs();
        assert_eq!(dirs.first().unwrap(), &PathBuf::from("llvm"));
        assert_eq!(
            dirs.last().unwrap(),
            &PathBuf::from("llvm/include/llvm/IR")
        );
    }

    #[test]
    fn test_nested_output_stays_under_gen_root() {
        let project = project();
        let mut registry = RecordingRegistry::new();

        let published = Registrar::new(&project, &Unchecked)
            .register("attrs", &ir_module(&["llvm/IR/Attributes.inc"]), &mut registry)
            .unwrap();

        assert_eq!(
            published.outputs,
            vec![PathBuf::from(
                "out/.intermediates/llvm/lib/IR/attrs/gen/llvm/IR/Attributes.inc"
            )]
        );
        assert_eq!(registry.actions()[0].invocation.mode, Mode::Attrs);
    }

    #[test]
    fn test_unrecognized_output_fails_the_module() {
        let project = project();
        let mut registry = RecordingRegistry::new();

        let err = Registrar::new(&project, &Unchecked)
            .register(
                "attrs",
                &ir_module(&["Attributes.inc", "Unknown.inc", "IntrinsicEnums.inc"]),
                &mut registry,
            )
            .unwrap_err();

        match &err {
            RegisterError::UnrecognizedOutput { module, output, .. } => {
                assert_eq!(module, "attrs");
                assert_eq!(output, "Unknown.inc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Earlier registrations are not rolled back; later ones never happen.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_escaping_output_is_rejected() {
        let project = project();
        let mut registry = RecordingRegistry::new();

        let err = Registrar::new(&project, &Unchecked)
            .register("attrs", &ir_module(&["../Attributes.inc"]), &mut registry)
            .unwrap_err();

        assert!(matches!(err, RegisterError::InvalidOutput { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_outputs_resolving_to_one_file_are_rejected() {
        let project = project();
        let mut registry = RecordingRegistry::new();

        let err = Registrar::new(&project, &Unchecked)
            .register(
                "attrs",
                &ir_module(&["Attributes.inc", "./Attributes.inc"]),
                &mut registry,
            )
            .unwrap_err();

        match &err {
            RegisterError::InvalidOutput { output, .. } => assert_eq!(output, "./Attributes.inc"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_input_is_unresolved() {
        let temp = TempDir::new().unwrap();
        let project = project();
        let resolver = SourceRoot::new(temp.path());
        let mut registry = RecordingRegistry::new();

        let err = Registrar::new(&project, &resolver)
            .register("attrs", &ir_module(&["Attributes.inc"]), &mut registry)
            .unwrap_err();

        match &err {
            RegisterError::UnresolvedPath { module, path, .. } => {
                assert_eq!(module, "attrs");
                assert_eq!(path, &PathBuf::from("llvm/lib/IR/Attributes.td"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.module(), "attrs");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_existing_input_resolves() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("llvm/lib/IR")).unwrap();
        fs::write(temp.path().join("llvm/lib/IR/Attributes.td"), "").unwrap();

        let project = project();
        let resolver = SourceRoot::new(temp.path());
        let mut registry = RecordingRegistry::new();

        Registrar::new(&project, &resolver)
            .register("attrs", &ir_module(&["Attributes.inc"]), &mut registry)
            .unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_escaping_input_is_unresolved() {
        let project = project();
        let mut registry = RecordingRegistry::new();
        let module = ModuleSpec::new("llvm", "../Attributes.td", ["Attributes.inc"]);

        let err = Registrar::new(&project, &Unchecked)
            .register("attrs", &module, &mut registry)
            .unwrap_err();
        assert!(matches!(err, RegisterError::UnresolvedPath { .. }));
    }

    #[test]
    fn test_custom_project_settings_flow_into_commands() {
        let project = ProjectConfig {
            tool: "prebuilts/bin/llvm-min-tblgen".to_string(),
            out_dir: PathBuf::from("build"),
            include_roots: vec!["third_party/llvm/include".to_string()],
        };
        let mut registry = RecordingRegistry::new();

        Registrar::new(&project, &Unchecked)
            .register("vt", &ModuleSpec::new(".", "ValueTypes.td", ["GenVT.inc"]), &mut registry)
            .unwrap();

        assert_eq!(
            registry.actions()[0].command_line(),
            "prebuilts/bin/llvm-min-tblgen -I . -I third_party/llvm/include -I . --gen-vt \
             -d build/.intermediates/vt/gen/GenVT.inc.d \
             -o build/.intermediates/vt/gen/GenVT.inc ValueTypes.td"
        );
    }
}
