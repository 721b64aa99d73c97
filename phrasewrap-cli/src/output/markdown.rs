//! Markdown output formatter

use super::{LineRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs lines as a numbered list of phrases
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
    phrase_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
            phrase_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, record: &LineRecord) -> Result<()> {
        if record.phrases.is_empty() {
            return Ok(());
        }
        self.line_count += 1;
        self.phrase_count += record.phrases.len();
        writeln!(
            self.writer,
            "{}. {}",
            self.line_count,
            record.phrases.join(" | ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total phrases: {} in {} lines*",
            self.phrase_count, self.line_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phrases: &[&str]) -> LineRecord {
        LineRecord {
            file: "a.txt".to_string(),
            line: 1,
            contents: phrases.concat(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            no_break: Vec::new(),
            line_ending: Default::default(),
        }
    }

    #[test]
    fn test_numbered_phrase_list() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_line(&record(&["私は", "本を", "読む"])).unwrap();
        formatter.format_line(&record(&[])).unwrap();
        formatter.format_line(&record(&["はい"])).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            output,
            "1. 私は | 本を | 読む\n2. はい\n\n---\n*Total phrases: 4 in 2 lines*\n"
        );
    }
}
