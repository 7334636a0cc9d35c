//! Build actions and the rule they share.

use std::path::{Path, PathBuf};

use mintbl_core::GeneratorInvocation;
use serde::Serialize;

use crate::layout::clean;

/// Static parameters shared by every generator build action.
///
/// The command template refers to per-action variables (`includes`,
/// `generator`) and to the rule's own `depfile`, so a host renders the rule
/// once and binds only the variables per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    /// Variable holding the generator tool.
    pub tool_var: &'static str,
    pub command: &'static str,
    pub depfile: &'static str,
    /// Dependency-file format.
    pub deps: &'static str,
    pub description: &'static str,
    /// Re-stat outputs after running so unchanged outputs don't dirty dependents.
    pub restat: bool,
}

pub const TBLGEN_RULE: Rule = Rule {
    name: "tblgen",
    tool_var: "tblgen_tool",
    command: "${tblgen_tool} ${includes} ${generator} -d ${depfile} -o ${out} ${in}",
    depfile: "${out}.d",
    deps: "gcc",
    description: "LLVM Min TableGen $in => $out",
    restat: true,
};

/// Ordered include search roots passed to the generator.
///
/// The order is the search precedence: the module directory, then the fixed
/// project roots, then the directory of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IncludeSet(Vec<PathBuf>);

impl IncludeSet {
    pub fn new(module_dir: &Path, roots: &[String], input: &Path) -> Self {
        let input_dir = input.parent().unwrap_or(Path::new("."));

        let mut dirs = Vec::with_capacity(roots.len() + 2);
        dirs.push(clean(module_dir));
        dirs.extend(roots.iter().map(|root| clean(Path::new(root))));
        dirs.push(clean(input_dir));
        Self(dirs)
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The include flags as separate arguments: `-I`, dir, `-I`, dir, ...
    pub fn args(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|dir| ["-I".to_string(), dir.display().to_string()])
            .collect()
    }

    /// The include flags as one string: `-I dir -I dir ...`
    pub fn flags(&self) -> String {
        self.0
            .iter()
            .map(|dir| format!("-I {}", dir.display()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One registered unit of work: generate `output` from `input`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildAction {
    /// Module that registered the action.
    pub module: String,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Where the generator writes the inputs it actually read.
    pub depfile: PathBuf,
    pub invocation: GeneratorInvocation,
    pub includes: IncludeSet,
    /// Fully rendered command line, tool first.
    pub command: Vec<String>,
}

impl BuildAction {
    pub fn new(
        module: impl Into<String>,
        tool: &str,
        input: PathBuf,
        output: PathBuf,
        invocation: GeneratorInvocation,
        includes: IncludeSet,
    ) -> Self {
        let depfile = depfile_for(&output);

        let mut command = vec![tool.to_string()];
        command.extend(includes.args());
        command.extend(invocation.args());
        command.push("-d".to_string());
        command.push(depfile.display().to_string());
        command.push("-o".to_string());
        command.push(output.display().to_string());
        command.push(input.display().to_string());

        Self {
            module: module.into(),
            input,
            output,
            depfile,
            invocation,
            includes,
            command,
        }
    }

    /// The command as a single space-joined line.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// The dependency file of an output: the output path with `.d` appended.
pub fn depfile_for(output: &Path) -> PathBuf {
    let mut depfile = output.as_os_str().to_owned();
    depfile.push(".d");
    PathBuf::from(depfile)
}
