//! Output trait for rendering reports to different formats.

use std::io::{self, Write};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, JSON, HTML, etc).
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render text exactly as given, without a trailing newline.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Raw content may be redirected into a file, so write failures are kept and
/// surfaced by [`finish`](Self::finish) instead of being dropped.
pub struct TerminalOutput {
    error: Option<io::Error>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { error: None }
    }

    /// Return the first error raised while writing raw content.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write_raw(&mut io::stdout().lock(), text) {
            self.error = Some(err);
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

fn write_raw(writer: &mut impl Write, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Collects rendered lines in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push_str(&format!("{}:\n", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push_str(&format!("{}: {}\n", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.stdout.push_str(&format!("  {}: {}\n", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push_str(&format!("  - {}\n", text));
    }

    fn error(&mut self, msg: &str) {
        self.stderr.push_str(&format!("error: {}\n", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push_str(&format!("warning: {}\n", msg));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push_str(text);
        self.stdout.push('\n');
    }

    fn raw(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn newline(&mut self) {
        self.stdout.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_raw_reports_failure() {
        let err = write_raw(&mut FullDisk, "build all: phony\n").unwrap_err();
        assert_eq!(err.to_string(), "no space left on device");
    }

    #[test]
    fn test_write_raw_writes_everything() {
        let mut buffer = Vec::new();
        write_raw(&mut buffer, "rule tblgen\n").unwrap();
        assert_eq!(buffer, b"rule tblgen\n");
    }

    #[test]
    fn test_terminal_output_finishes_cleanly_without_raw_content() {
        let mut out = TerminalOutput::new();
        out.newline();
        assert!(out.finish().is_ok());
    }
}
