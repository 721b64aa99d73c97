//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One processed input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Source file
    pub file: String,
    /// 1-based line number in the source file
    pub line: usize,
    /// Rewritten contents, phrases joined by the separator
    pub contents: String,
    /// The phrases of the line, empty for blank lines
    pub phrases: Vec<String>,
    /// Per-character non-break flags of `contents`
    pub no_break: Vec<bool>,
    /// Terminator of the source line, restored by the text formatter
    #[serde(skip)]
    pub line_ending: LineEnding,
}

/// Line terminator of a source line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`, also used for a last line without a terminator
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single line
    fn format_line(&mut self, record: &LineRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
