//! Reading input files into in-memory documents

use crate::output::LineEnding;
use anyhow::{Context, Result};
use phrasewrap_host::{MemoryDocument, MemorySelection, TextFrame};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Split `text` into lines, each paired with its terminator
    ///
    /// A last line without a terminator is reported as [`LineEnding::Lf`].
    pub fn split_lines(text: &str) -> impl Iterator<Item = (&str, LineEnding)> + '_ {
        text.split_inclusive('\n').map(|raw| match raw.strip_suffix("\r\n") {
            Some(line) => (line, LineEnding::CrLf),
            None => (raw.strip_suffix('\n').unwrap_or(raw), LineEnding::Lf),
        })
    }

    /// Build a document whose selection holds one text frame per line
    ///
    /// Blank and whitespace-only lines become items without text, which the
    /// dispatcher skips.
    pub fn document_from_text(text: &str) -> MemoryDocument {
        let items = Self::split_lines(text)
            .map(|(line, _)| {
                if line.trim().is_empty() {
                    TextFrame::empty()
                } else {
                    TextFrame::with_text(line)
                }
            })
            .collect();
        MemoryDocument::new(MemorySelection::Items(items))
    }
}
