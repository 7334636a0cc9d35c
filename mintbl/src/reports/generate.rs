//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    check::plural,
    output::{Output, Report},
};

/// Report data from build-graph generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of registered modules.
    pub module_count: usize,
    /// Number of registered build actions.
    pub action_count: usize,
    /// Where the result went.
    pub result: GenerateResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerateResult {
    /// The file was written (or already up to date).
    Written { path: PathBuf, changed: bool },
    /// Dry run or stdout output.
    Printed { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerateResult::Printed { content } => out.raw(content),
            GenerateResult::Written { path, changed } => {
                let status = if *changed { "Generated" } else { "Up to date" };
                out.preformatted(&format!(
                    "{}: {} ({} module{}, {} build action{})",
                    status,
                    path.display(),
                    self.module_count,
                    plural(self.module_count),
                    self.action_count,
                    plural(self.action_count)
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            module_count: 2,
            action_count: 1,
            result: GenerateResult::Written {
                path: PathBuf::from("out/build.mintbl.ninja"),
                changed: false,
            },
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            "Up to date: out/build.mintbl.ninja (2 modules, 1 build action)\n"
        );
    }

    #[test]
    fn test_render_printed_verbatim() {
        let report = GenerateReport {
            module_count: 0,
            action_count: 0,
            result: GenerateResult::Printed {
                content: "# header\n\n".to_string(),
            },
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout, "# header\n\n");
    }
}
