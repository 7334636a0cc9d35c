//! Ninja build file backend.
//!
//! [`NinjaWriter`] is an [`ActionRegistry`] that collects actions and renders
//! them as a self-contained `build.ninja` fragment: the tool variable, each
//! rule once, one edge per action and one phony target per module.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr, bail};
use tracing::info;

use crate::{
    ActionRegistry,
    action::{BuildAction, Rule},
};

const HEADER: &str = "# Generated by mintbl. Do not edit.";

/// Result of writing a Ninja file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content and was left untouched
    Unchanged,
}

/// Collects build actions and renders them as Ninja.
///
/// # Example
///
/// ```
/// use mintbl_graph::{NinjaWriter, Registrar, Unchecked};
/// use mintbl_manifest::{ModuleSpec, ProjectConfig};
///
/// let project = ProjectConfig::default();
/// let module = ModuleSpec::new(".", "Attributes.td", ["Attributes.inc"]);
/// let mut ninja = NinjaWriter::new(&project.tool);
///
/// let published = Registrar::new(&project, &Unchecked)
///     .register("attrs", &module, &mut ninja)
///     .unwrap();
/// ninja.add_phony("attrs", &published.outputs);
///
/// let text = ninja.render().unwrap();
/// assert!(text.contains("rule tblgen\n"));
/// assert!(text.contains("build attrs: phony out/.intermediates/attrs/gen/Attributes.inc\n"));
/// ```
#[derive(Debug, Clone)]
pub struct NinjaWriter {
    tool: String,
    rules: Vec<Rule>,
    /// Actions with the index of their rule in `rules`.
    edges: Vec<(usize, BuildAction)>,
    phonies: Vec<(String, Vec<PathBuf>)>,
}

impl NinjaWriter {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            rules: Vec::new(),
            edges: Vec::new(),
            phonies: Vec::new(),
        }
    }

    /// Actions registered so far, in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &BuildAction> {
        self.edges.iter().map(|(_, action)| action)
    }

    /// Add a phony target that builds all of `outputs`.
    pub fn add_phony(&mut self, name: impl Into<String>, outputs: &[PathBuf]) {
        self.phonies.push((name.into(), outputs.to_vec()));
    }

    /// Render the collected graph.
    ///
    /// # Errors
    ///
    /// Fails if a phony target is named like a file of the graph, or if two
    /// phony targets share a name.
    pub fn render(&self) -> Result<String> {
        self.check_phonies()?;

        let mut out = Lines::new().line(HEADER).blank();

        // A bare program name is found on PATH and isn't a graph node.
        let tool_is_path = self.tool.contains('/');

        if !self.rules.is_empty() {
            for rule in &self.rules {
                out = out.line(&format!("{} = {}", rule.tool_var, escape_value(&self.tool)));
            }
            out = out.blank();
        }

        for rule in &self.rules {
            out = out
                .line(&format!("rule {}", rule.name))
                .binding("command", rule.command)
                .binding("description", rule.description)
                .binding("depfile", rule.depfile)
                .binding("deps", rule.deps);
            if rule.restat {
                out = out.binding("restat", "1");
            }
            out = out.blank();
        }

        for (rule, edge) in &self.edges {
            let rule = &self.rules[*rule];
            let mut head = format!(
                "build {}: {} {}",
                escape_path(&edge.output),
                rule.name,
                escape_path(&edge.input)
            );
            if tool_is_path {
                head.push_str(&format!(" | ${}", rule.tool_var));
            }
            out = out
                .line(&head)
                .binding("includes", &escape_value(&edge.includes.flags()))
                .binding("generator", &escape_value(&edge.invocation.to_string()))
                .blank();
        }

        for (name, outputs) in &self.phonies {
            let mut line = format!("build {}: phony", escape_str(name));
            for output in outputs {
                line.push(' ');
                line.push_str(&escape_path(output));
            }
            out = out.line(&line);
        }

        Ok(out.build())
    }

    // Phony targets and files share one namespace.
    fn check_phonies(&self) -> Result<()> {
        let files: HashSet<&Path> = self
            .edges
            .iter()
            .flat_map(|(_, action)| [action.input.as_path(), action.output.as_path()])
            .collect();

        let mut names = HashSet::new();
        for (name, _) in &self.phonies {
            if files.contains(Path::new(name.as_str())) {
                bail!("phony target '{}' has the same name as a file in the build graph", name);
            }
            if !names.insert(name.as_str()) {
                bail!("phony target '{}' is declared more than once", name);
            }
        }
        Ok(())
    }

    /// Write the rendered graph to `path`, creating parent directories.
    ///
    /// The file is left alone when it already holds the same content, so
    /// Ninja doesn't see a fresh mtime and regenerate needlessly.
    pub fn write_to(&self, path: &Path) -> Result<WriteResult> {
        let content = self.render()?;

        if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
            info!(path = %path.display(), "ninja file unchanged");
            return Ok(WriteResult::Unchanged);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;

        info!(path = %path.display(), edges = self.edges.len(), "wrote ninja file");
        Ok(WriteResult::Written)
    }
}

impl ActionRegistry for NinjaWriter {
    fn register(&mut self, rule: &Rule, action: BuildAction) {
        let index = match self.rules.iter().position(|r| r.name == rule.name) {
            Some(index) => index,
            None => {
                self.rules.push(*rule);
                self.rules.len() - 1
            }
        };
        self.edges.push((index, action));
    }
}

/// Fluent line-oriented text builder.
struct Lines {
    buffer: String,
}

impl Lines {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn line(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// An indented `key = value` binding under the previous rule or edge.
    fn binding(mut self, key: &str, value: &str) -> Self {
        self.buffer.push_str("  ");
        self.buffer.push_str(key);
        self.buffer.push_str(" = ");
        self.buffer.push_str(value);
        self.buffer.push('\n');
        self
    }

    fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    fn build(self) -> String {
        self.buffer
    }
}

fn escape_path(path: &Path) -> String {
    escape_str(&path.display().to_string())
}

/// Escape text used as a path on a `build` line.
fn escape_str(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '$' | ' ' | ':' => {
                escaped.push('$');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text used as a variable value.
fn escape_value(s: &str) -> String {
    s.replace('$', "$$")
}
