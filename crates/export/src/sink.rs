//! Output capabilities for materialized artifacts.
//!
//! The analytics components only ever produce text; actually writing a
//! file or the clipboard belongs to whoever owns the surrounding
//! application. That seam is this trait, injected into the caller.

use comps_core::Result;

/// Narrow external output capabilities.
pub trait ExportSink {
    /// Materialize text under a caller-chosen filename.
    fn materialize_file(&mut self, name: &str, text: &str) -> Result<()>;

    /// Replace the clipboard contents with text.
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
}

/// In-memory sink for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Materialized files as (name, text) pairs, in write order.
    pub files: Vec<(String, String)>,
    /// Last clipboard payload.
    pub clipboard: Option<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for MemorySink {
    fn materialize_file(&mut self, name: &str, text: &str) -> Result<()> {
        self.files.push((name.to_string(), text.to_string()));
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
