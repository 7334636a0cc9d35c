//! Classify and modes report data structures.

use super::output::{Output, Report};

/// Report data from classifying output names.
#[derive(Debug)]
pub struct ClassifyReport {
    pub entries: Vec<ClassifyEntry>,
}

/// Classification of one name.
#[derive(Debug)]
pub struct ClassifyEntry {
    pub name: String,
    /// The matched catalog entry and its generator flags, or the error.
    pub result: Result<(String, String), String>,
}

impl ClassifyReport {
    /// Whether any name failed to classify.
    pub fn has_unrecognized(&self) -> bool {
        self.entries.iter().any(|e| e.result.is_err())
    }
}

impl Report for ClassifyReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            match &entry.result {
                Ok((kind, flags)) if *kind == entry.name => {
                    out.preformatted(&format!("{}: {}", entry.name, flags));
                }
                Ok((kind, flags)) => {
                    out.preformatted(&format!("{} ({}): {}", entry.name, kind, flags));
                }
                Err(err) => out.error(err),
            }
        }
    }
}

/// Report data listing the catalog.
#[derive(Debug)]
pub struct ModesReport {
    pub entries: Vec<ModeEntry>,
}

/// One catalog entry.
#[derive(Debug)]
pub struct ModeEntry {
    /// File name, or `*suffix` for suffix rules.
    pub pattern: String,
    pub flags: String,
}

impl Report for ModesReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self
            .entries
            .iter()
            .map(|e| e.pattern.len())
            .max()
            .unwrap_or(0);
        for entry in &self.entries {
            out.preformatted(&format!("{:<width$}  {}", entry.pattern, entry.flags));
        }
    }
}
