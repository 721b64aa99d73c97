//! Range adapter: writes phrase separators into a host text range
//!
//! After [`apply_to_range`] the range contains its phrases joined by the
//! separator, every original character is marked non-breaking and only the
//! inserted separators are breakable. The host's line breaker can then wrap
//! only between phrases.

use crate::error::{HostError, Result};
use crate::text_range::TextRange;
use phrasewrap_core::{Parser, WeightTable};

/// Check that `separator` is exactly one character and return it
pub fn parse_separator(separator: &str) -> Result<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(HostError::InvalidArgument {
            reason: format!(
                "separator must be exactly one character, got {}",
                separator.chars().count()
            ),
        }),
    }
}

/// Segment `text_range` and rewrite it with `separator` between phrases
///
/// Fails with [`HostError::InvalidArgument`] before touching the range if
/// `separator` is not a single character. Existing separators are removed
/// first, so applying the adapter twice gives the same result as once.
pub fn apply_to_range(
    weights: &WeightTable,
    text_range: &mut dyn TextRange,
    separator: &str,
) -> Result<()> {
    let separator = parse_separator(separator)?;
    apply_with_separator(weights, text_range, separator)
}

pub(crate) fn apply_with_separator(
    weights: &WeightTable,
    text_range: &mut dyn TextRange,
    separator: char,
) -> Result<()> {
    let cleaned: String = text_range
        .contents()
        .chars()
        .filter(|&ch| ch != separator)
        .collect();

    let phrases = Parser::new(weights).parse(&cleaned);
    let glue = separator.to_string();
    text_range.set_contents(&phrases.join(glue.as_str()));
    text_range.set_all_no_break(true)?;

    let len = text_range.character_count();
    let mut index = 0;
    for phrase in phrases.iter().take(phrases.len().saturating_sub(1)) {
        index += phrase.chars().count();
        if index >= len {
            return Err(HostError::CharacterOutOfRange { index, len });
        }
        text_range.set_no_break(index, false)?;
        index += 1;
    }

    log::debug!(
        "Rewrote range: {} chars, {} phrases",
        cleaned.chars().count(),
        phrases.len()
    );
    Ok(())
}
