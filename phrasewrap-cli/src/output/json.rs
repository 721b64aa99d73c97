//! JSON output formatter

use super::{LineRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs every line record as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<LineRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, record: &LineRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_round_trip_through_json() {
        let record = LineRecord {
            file: "a.txt".to_string(),
            line: 3,
            contents: "ab-c".to_string(),
            phrases: vec!["ab".to_string(), "c".to_string()],
            no_break: vec![true, true, false, true],
            line_ending: Default::default(),
        };

        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_line(&record).unwrap();
        formatter.finish().unwrap();

        let output = formatter.into_inner();
        let parsed: Vec<LineRecord> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
