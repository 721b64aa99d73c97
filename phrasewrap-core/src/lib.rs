//! Phrase boundary detection for unsegmented text
//!
//! This crate decides, for every adjacent character pair in a string,
//! whether a phrase boundary lies between them. The decision is made by an
//! additive linear model over character n-gram features taken from a
//! six-character window around the candidate boundary. The weights come from
//! an externally trained [`WeightTable`].
//!
//! # Architecture
//!
//! - [`window`]: the six context slots around a boundary candidate
//! - [`feature`]: n-gram feature tokens for one window
//! - [`model`]: the weight table and its JSON loaders
//! - [`parser`]: boundary scoring and greedy phrase segmentation
//!
//! # Example
//!
//! ```rust
//! use phrasewrap_core::{segment, WeightTable};
//!
//! let weights: WeightTable = [("UW4:a", 10_000.0)].into_iter().collect();
//! let phrases = segment(&weights, "abcdeabcd");
//! assert_eq!(phrases, vec!["abcde", "abcd"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod feature;
pub mod model;
pub mod parser;
pub mod window;

pub use error::{CoreError, Result};
pub use feature::{extract_features, extract_window, FeatureClass, FeatureList, MAX_FEATURES};
pub use model::{Weight, WeightTable};
pub use parser::{segment, Parser};
pub use window::{ContextWindow, Slot};

/// Out-of-bounds sentinel for feature extraction
pub const INVALID: Slot = Slot::Invalid;
