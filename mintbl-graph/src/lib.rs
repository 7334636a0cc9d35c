//! Build-action registration for the LLVM min-tablegen generator.
//!
//! Given a module (one input file, a list of requested outputs), this crate
//! classifies every output, builds one generator command per output and hands
//! the resulting [`BuildAction`]s to a host [`ActionRegistry`].
//!
//! # Module Organization
//!
//! - [`register`] - the [`Registrar`] and the artifacts it publishes
//! - [`action`] - build actions, the shared rule and include sets
//! - [`host`] - host collaborator traits: input resolution and action registries
//! - [`ninja`] - a registry that renders a Ninja build file
//! - [`check`] - whole-manifest validation with diagnostics
//!
//! # Example
//!
//! ```
//! use mintbl_graph::{RecordingRegistry, Registrar, Unchecked};
//! use mintbl_manifest::{ModuleSpec, ProjectConfig};
//!
//! let project = ProjectConfig::default();
//! let module = ModuleSpec::new("llvm/lib/IR", "Attributes.td", ["Attributes.inc"]);
//! let mut registry = RecordingRegistry::new();
//!
//! let published = Registrar::new(&project, &Unchecked)
//!     .register("attrs", &module, &mut registry)
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 1);
//! assert_eq!(published.include_dirs.len(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod action;
pub mod check;
mod diagnostic;
mod error;
pub mod host;
mod layout;
pub mod ninja;
pub mod register;

pub use action::{BuildAction, IncludeSet, Rule, TBLGEN_RULE};
pub use check::{CheckResult, check_manifest};
pub use diagnostic::{Diagnostic, Severity, Subject};
pub use error::{RegisterError, Result};
pub use host::{ActionRegistry, InputResolver, RecordingRegistry, SourceRoot, Unchecked};
pub use layout::Layout;
pub use ninja::{NinjaWriter, WriteResult};
pub use register::{PublishedArtifacts, Registrar};
