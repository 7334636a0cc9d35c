//! TOML manifest parsing and validation for mintbl.
//!
//! A manifest declares generator modules, each with one input file and the
//! list of outputs to generate from it, plus optional project-wide settings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_INCLUDE_ROOTS, DEFAULT_MANIFEST_NAME, DEFAULT_OUT_DIR, DEFAULT_TOOL, Manifest,
    ManifestFile, ModuleSpec, ParseContext, ProjectConfig, parse_manifest, path_problem,
};
