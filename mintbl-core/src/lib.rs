//! Output classification for the LLVM min-tablegen build adapter.
//!
//! This crate maps a requested output filename to the generator mode that
//! produces it. It has no knowledge of any host build system.
//!
//! # Example
//!
//! ```
//! use mintbl_core::{Mode, classify};
//!
//! let invocation = classify("IntrinsicsX86.h").unwrap();
//! assert_eq!(invocation.mode, Mode::IntrinsicEnums);
//! assert_eq!(invocation.to_string(), "-gen-intrinsic-enums -intrinsic-prefix=x86");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod error;
mod invocation;
mod kind;

pub use catalog::{base_name, catalog, classify, identify};
pub use error::{ClassifyError, Result};
pub use invocation::{GeneratorInvocation, Mode};
pub use kind::{DirectiveDialect, IntrinsicArch, OutputKind};
