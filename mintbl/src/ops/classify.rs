//! Classify and modes operations - catalog lookups.

use mintbl_core::{catalog, identify};

use crate::reports::{ClassifyEntry, ClassifyReport, ModeEntry, ModesReport};

/// Classify each name independently.
pub fn classify(names: &[String]) -> ClassifyReport {
    let entries = names
        .iter()
        .map(|name| ClassifyEntry {
            name: name.clone(),
            result: identify(name)
                .map(|kind| (kind.to_string(), kind.invocation().to_string()))
                .map_err(|err| err.to_string()),
        })
        .collect();

    ClassifyReport { entries }
}

/// List the whole catalog in match order.
pub fn modes() -> ModesReport {
    let entries = catalog()
        .into_iter()
        .map(|kind| ModeEntry {
            pattern: kind.to_string(),
            flags: kind.invocation().to_string(),
        })
        .collect();

    ModesReport { entries }
}
