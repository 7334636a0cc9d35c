//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Filename used in diagnostics when parsing from a string.
pub const DEFAULT_MANIFEST_NAME: &str = "mintbl.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_MANIFEST_NAME)
    }
}

impl Manifest {
    /// Parse a mintbl.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a mintbl.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.project.tool.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("project.tool cannot be empty", None));
    }

    for (name, module) in &manifest.modules {
        ctx.validate_module_name(name)?;

        let module_ctx = ctx.push(name);
        module_ctx.validate_module(module)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::manifest::DEFAULT_TOOL;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest: Manifest = r#"
            [modules.attrs]
            in = "Attributes.td"
            outs = ["Attributes.inc"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.project.tool, DEFAULT_TOOL);
        assert_eq!(manifest.project.out_dir, PathBuf::from("out"));
        assert_eq!(manifest.project.include_roots.len(), 2);

        let module = manifest.module("attrs").unwrap();
        assert_eq!(module.dir, PathBuf::from("."));
        assert_eq!(module.input, "Attributes.td");
        assert_eq!(module.outputs, vec!["Attributes.inc"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.modules.is_empty());
        assert_eq!(manifest.output_count(), 0);
    }

    #[test]
    fn test_modules_keep_declaration_order() {
        let manifest: Manifest = r#"
            [modules.zeta]
            in = "Z.td"

            [modules.alpha]
            in = "A.td"

            [modules.mid]
            in = "M.td"
        "#
        .parse()
        .unwrap();

        let names: Vec<_> = manifest.modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_outs_default_to_empty() {
        let manifest: Manifest = r#"
            [modules.nothing]
            in = "Nothing.td"
        "#
        .parse()
        .unwrap();
        assert!(manifest.module("nothing").unwrap().outputs.is_empty());
    }

    #[test]
    fn test_project_overrides() {
        let manifest: Manifest = r#"
            [project]
            tool = "prebuilts/llvm-min-tblgen"
            out_dir = "build/gen"
            include_roots = ["third_party/llvm/include"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.project.tool, "prebuilts/llvm-min-tblgen");
        assert_eq!(manifest.project.out_dir, PathBuf::from("build/gen"));
        assert_eq!(
            manifest.project.include_roots,
            vec!["third_party/llvm/include"]
        );
    }

    #[test]
    fn test_missing_input_is_a_parse_error() {
        let err = Manifest::from_str(
            r#"
            [modules.attrs]
            outs = ["Attributes.inc"]
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Manifest::from_str(
            r#"
            [modules.attrs]
            in = "Attributes.td"
            srcs = ["Attributes.td"]
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_tool_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [project]
            tool = " "
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let err = Manifest::from_file("/nonexistent/mintbl.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
