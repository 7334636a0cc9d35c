//! List command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data listing the modules of a manifest.
#[derive(Debug)]
pub struct ListReport {
    /// Generator tool.
    pub tool: String,
    /// Modules in declaration order.
    pub modules: Vec<ModuleInfo>,
}

/// One module.
#[derive(Debug)]
pub struct ModuleInfo {
    pub name: String,
    pub dir: PathBuf,
    pub input: String,
    pub outputs: Vec<OutputInfo>,
}

/// One requested output.
#[derive(Debug)]
pub struct OutputInfo {
    pub name: String,
    /// Generator flags, `None` if no mode produces the output.
    pub flags: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("tool", &self.tool);

        if self.modules.is_empty() {
            out.newline();
            out.preformatted("No modules defined.");
            return;
        }

        for module in &self.modules {
            out.newline();
            out.section(&module.name);
            out.key_value_indented("dir", &module.dir.display().to_string());
            out.key_value_indented("in", &module.input);

            let width = module
                .outputs
                .iter()
                .map(|o| o.name.len())
                .max()
                .unwrap_or(0);
            for output in &module.outputs {
                let flags = output.flags.as_deref().unwrap_or("(unrecognized)");
                out.list_item(&format!("{:<width$}  {}", output.name, flags));
            }
        }
    }
}
