//! Feature extraction for boundary candidates
//!
//! Every boundary candidate is described by up to 13 string tokens built
//! from its [`ContextWindow`]: six unigrams, three bigrams around the
//! boundary and four trigrams. A token is `"<tag>:<characters>"`, e.g.
//! `UW4:a` or `TW2:bcd`. Tokens touching an out-of-bounds slot are not
//! emitted.

use crate::window::{ContextWindow, Slot};
use smallvec::SmallVec;
use std::fmt;

/// Upper bound on the number of tokens per boundary candidate
pub const MAX_FEATURES: usize = 13;

/// Tokens for one boundary candidate, in emission order
pub type FeatureList = SmallVec<[String; MAX_FEATURES]>;

/// Feature classes and the window slots (1-based) each one reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    /// Unigram at w1
    UW1,
    /// Unigram at w2
    UW2,
    /// Unigram at w3
    UW3,
    /// Unigram at w4
    UW4,
    /// Unigram at w5
    UW5,
    /// Unigram at w6
    UW6,
    /// Bigram w2 w3
    BW1,
    /// Bigram w3 w4
    BW2,
    /// Bigram w4 w5
    BW3,
    /// Trigram w1 w2 w3
    TW1,
    /// Trigram w2 w3 w4
    TW2,
    /// Trigram w3 w4 w5
    TW3,
    /// Trigram w4 w5 w6
    TW4,
}

impl FeatureClass {
    /// All classes in emission order
    pub const ALL: [FeatureClass; MAX_FEATURES] = [
        FeatureClass::UW1,
        FeatureClass::UW2,
        FeatureClass::UW3,
        FeatureClass::UW4,
        FeatureClass::UW5,
        FeatureClass::UW6,
        FeatureClass::BW1,
        FeatureClass::BW2,
        FeatureClass::BW3,
        FeatureClass::TW1,
        FeatureClass::TW2,
        FeatureClass::TW3,
        FeatureClass::TW4,
    ];

    /// Tag used as the token prefix
    pub fn tag(self) -> &'static str {
        match self {
            FeatureClass::UW1 => "UW1",
            FeatureClass::UW2 => "UW2",
            FeatureClass::UW3 => "UW3",
            FeatureClass::UW4 => "UW4",
            FeatureClass::UW5 => "UW5",
            FeatureClass::UW6 => "UW6",
            FeatureClass::BW1 => "BW1",
            FeatureClass::BW2 => "BW2",
            FeatureClass::BW3 => "BW3",
            FeatureClass::TW1 => "TW1",
            FeatureClass::TW2 => "TW2",
            FeatureClass::TW3 => "TW3",
            FeatureClass::TW4 => "TW4",
        }
    }

    /// Parse a tag such as `"BW2"`
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.tag() == tag)
    }

    /// Window slots read by this class, as 1-based indices
    pub fn slots(self) -> &'static [usize] {
        match self {
            FeatureClass::UW1 => &[1],
            FeatureClass::UW2 => &[2],
            FeatureClass::UW3 => &[3],
            FeatureClass::UW4 => &[4],
            FeatureClass::UW5 => &[5],
            FeatureClass::UW6 => &[6],
            FeatureClass::BW1 => &[2, 3],
            FeatureClass::BW2 => &[3, 4],
            FeatureClass::BW3 => &[4, 5],
            FeatureClass::TW1 => &[1, 2, 3],
            FeatureClass::TW2 => &[2, 3, 4],
            FeatureClass::TW3 => &[3, 4, 5],
            FeatureClass::TW4 => &[4, 5, 6],
        }
    }

    /// Token for this class over `window`, or `None` if any slot it reads
    /// is out of bounds
    pub fn token(self, window: &ContextWindow) -> Option<String> {
        let slots = self.slots();
        let mut token = String::with_capacity(4 + slots.len() * 4);
        token.push_str(self.tag());
        token.push(':');
        for &n in slots {
            token.push(window.get(n)?.as_char()?);
        }
        Some(token)
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Extract the feature tokens for the window `w1..w6`
pub fn extract_features(
    w1: Slot,
    w2: Slot,
    w3: Slot,
    w4: Slot,
    w5: Slot,
    w6: Slot,
) -> FeatureList {
    extract_window(&ContextWindow::new([w1, w2, w3, w4, w5, w6]))
}

/// Extract the feature tokens for a prepared window
pub fn extract_window(window: &ContextWindow) -> FeatureList {
    FeatureClass::ALL
        .into_iter()
        .filter_map(|class| class.token(window))
        .collect()
}
