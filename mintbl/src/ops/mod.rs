//! Core operations.
//!
//! This module contains the business logic for mintbl commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod classify;
pub mod generate;
pub mod list;

pub use check::check;
pub use classify::{classify, modes};
pub use generate::generate;
pub use list::list;
