//! Validation context and utilities for manifest parsing.

use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use miette::SourceSpan;

use super::ModuleSpec;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, so nested validation can attribute errors
/// to the module that caused them.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "mintbl.toml");
/// ctx.validate_module_name("llvm-gen-attributes")?;
///
/// let module_ctx = ctx.push("llvm-gen-attributes");
/// module_ctx.validate_module(&module)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["llvm-gen-attributes"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Validate a module name used as a `[modules.<name>]` key.
    pub fn validate_module_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_module_name(name) {
            return Err(self.source.invalid_module_name_error(
                name,
                reason,
                find_module_span(self.source.src(), name),
            ));
        }
        Ok(())
    }

    /// Validate the contents of one module. The context must have the module
    /// name pushed.
    pub fn validate_module(&self, module: &ModuleSpec) -> Result<()> {
        let module_name = self.path_string();
        let src = self.source.src();

        if module.input.trim().is_empty() {
            return Err(self.source.validation_error(
                format!("module '{}' has an empty 'in'", module_name),
                find_module_key_span(src, &module_name, "in"),
            ));
        }

        if let Some(reason) = path_problem(&module.dir.to_string_lossy()) {
            return Err(self.source.validation_error(
                format!("module '{}' has an invalid 'dir': {}", module_name, reason),
                find_module_key_span(src, &module_name, "dir"),
            ));
        }

        // normalized path -> first spelling
        let mut seen: HashMap<PathBuf, &str> = HashMap::new();
        for output in &module.outputs {
            if let Some(reason) = path_problem(output) {
                return Err(self.source.invalid_output_error(
                    &module_name,
                    output,
                    reason,
                    find_module_string_span(src, &module_name, output, 0),
                ));
            }

            if let Some(first) = seen.insert(normalize(output), output) {
                let second_nth = if first == output.as_str() { 1 } else { 0 };
                return Err(self.source.duplicate_output_error(
                    &module_name,
                    output,
                    find_module_string_span(src, &module_name, first, 0),
                    find_module_string_span(src, &module_name, output, second_nth),
                ));
            }
        }

        Ok(())
    }
}

/// Check that a path is non-empty, relative, and stays inside its base
/// directory. Returns `Some(reason)` if it doesn't.
pub fn path_problem(path: &str) -> Option<&'static str> {
    if path.trim().is_empty() {
        return Some("path cannot be empty");
    }

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                return Some("path must be relative");
            }
            Component::ParentDir => return Some("path cannot contain '..'"),
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    None
}

/// Drop `.` components so `./A.inc` and `A.inc` compare equal.
fn normalize(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Validate a module name. Returns `Some(reason)` if invalid.
pub(crate) fn validate_module_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    match name.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return Some("name must start with a letter, number, or underscore"),
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Some("name contains an invalid character");
    }

    None
}

/// Find the span of a module name in its table header.
/// Matches `[modules.name]` and `[modules."name"]`.
pub(crate) fn find_module_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("[modules.{}]", name), 9usize),
        (format!("[modules.\"{}\"]", name), 10usize),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    None
}

/// The body of a module's table and its offset in `src`.
///
/// The body runs from the line after the header to the next table header.
fn module_table<'s>(src: &'s str, name: &str) -> Option<(usize, &'s str)> {
    let header = find_module_span(src, name)?.offset();
    let start = src[header..]
        .find('\n')
        .map_or(src.len(), |newline| header + newline + 1);

    let mut end = start;
    for line in src[start..].split_inclusive('\n') {
        if line.trim_start().starts_with('[') {
            break;
        }
        end += line.len();
    }
    Some((start, &src[start..end]))
}

/// Find the `nth` quoted occurrence of `value` inside a module's table.
pub(crate) fn find_module_string_span(
    src: &str,
    module: &str,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let (offset, table) = module_table(src, module)?;
    find_string_span(table, value, nth)
        .map(|span| SourceSpan::from((offset + span.offset(), span.len())))
}

/// Find the span of the string value of `key = "..."` inside a module's table.
pub(crate) fn find_module_key_span(src: &str, module: &str, key: &str) -> Option<SourceSpan> {
    let (offset, table) = module_table(src, module)?;

    let mut line_start = offset;
    for line in table.split_inclusive('\n') {
        let value = line
            .trim_start()
            .strip_prefix(key)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::trim_start)
            .filter(|value| value.starts_with('"'));

        if let Some(value) = value {
            let quote = line_start + line.len() - value.len();
            let len = value[1..].find('"').unwrap_or(0);
            return Some(SourceSpan::from((quote + 1, len)));
        }
        line_start += line.len();
    }

    None
}

/// Find the span of the `nth` quoted occurrence of a string value.
pub(crate) fn find_string_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.match_indices(quoted.as_str())
        .nth(nth)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
}
