//! Plain text output formatter

use super::{LineRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs each rewritten line with its original
/// terminator
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, record: &LineRecord) -> Result<()> {
        write!(
            self.writer,
            "{}{}",
            record.contents,
            record.line_ending.as_str()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
