//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod classify;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use classify::{ClassifyEntry, ClassifyReport, ModeEntry, ModesReport};
pub use generate::{GenerateReport, GenerateResult};
pub use list::{ListReport, ModuleInfo, OutputInfo};
pub use output::{Report, TerminalOutput};
