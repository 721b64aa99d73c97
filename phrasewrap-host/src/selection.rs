//! Selection dispatcher: the entry point that rewrites whatever is selected

use crate::adapter::{apply_with_separator, parse_separator};
use crate::error::Result;
use crate::text_range::{SelectionItem, TextRange};
use phrasewrap_core::WeightTable;

/// U+200B ZERO WIDTH SPACE, invisible but breakable
pub const DEFAULT_SEPARATOR: &str = "\u{200B}";

/// The host's active selection
pub enum Selection<'a> {
    /// Nothing is selected
    Empty,
    /// A text range (a caret run inside a text frame) is selected
    Range(&'a mut dyn TextRange),
    /// One or more page items are selected
    Items(Vec<&'a mut dyn SelectionItem>),
}

impl std::fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Empty => f.write_str("Empty"),
            Selection::Range(range) => f.debug_tuple("Range").field(&range.contents()).finish(),
            Selection::Items(items) => f
                .debug_tuple("Items")
                .field(&format!("<{} items>", items.len()))
                .finish(),
        }
    }
}

/// A host document exposing its active selection
pub trait Document {
    /// The current selection
    fn selection(&mut self) -> Selection<'_>;
}

/// Counts reported by [`run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Text ranges rewritten
    pub ranges: usize,
    /// Selected items skipped for having no text
    pub skipped: usize,
}

/// Insert `separator` between the phrases of everything selected in
/// `document`
///
/// The separator is validated before any range is touched, so an invalid
/// separator never leaves a multi-item selection half rewritten.
pub fn run(
    document: &mut dyn Document,
    weights: &WeightTable,
    separator: &str,
) -> Result<RunSummary> {
    let separator = parse_separator(separator)?;
    let mut summary = RunSummary::default();

    match document.selection() {
        Selection::Empty => {
            log::debug!("Nothing selected");
        }
        Selection::Range(range) => {
            apply_with_separator(weights, range, separator)?;
            summary.ranges += 1;
        }
        Selection::Items(items) => {
            for item in items {
                match item.text_range_mut() {
                    Some(range) => {
                        apply_with_separator(weights, range, separator)?;
                        summary.ranges += 1;
                    }
                    None => summary.skipped += 1,
                }
            }
        }
    }

    log::info!(
        "Rewrote {} text ranges, skipped {} items without text",
        summary.ranges,
        summary.skipped
    );
    Ok(summary)
}

/// [`run`] with [`DEFAULT_SEPARATOR`]
pub fn run_default(document: &mut dyn Document, weights: &WeightTable) -> Result<RunSummary> {
    run(document, weights, DEFAULT_SEPARATOR)
}
