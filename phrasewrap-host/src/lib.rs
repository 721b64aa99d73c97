//! Host document adapter for phrase-aware line wrapping
//!
//! This crate connects the segmenter in `phrasewrap-core` to a host
//! document model. It rewrites the selected text so that a separator sits
//! between phrases, marks every other character non-breaking, and leaves
//! line wrapping to the host.

#![warn(missing_docs)]

pub mod adapter;
pub mod error;
pub mod memory;
pub mod selection;
pub mod text_range;

// Re-export key types
pub use adapter::{apply_to_range, parse_separator};
pub use error::{HostError, Result};
pub use memory::{Character, MemoryDocument, MemorySelection, MemoryTextRange, TextFrame};
pub use selection::{run, run_default, Document, RunSummary, Selection, DEFAULT_SEPARATOR};
pub use text_range::{SelectionItem, TextRange};

// Re-export from core for convenience
pub use phrasewrap_core::{segment, Parser, WeightTable};
