//! Host text object model
//!
//! The host application owns its rich-text objects. These traits are the
//! only operations the adapter needs from them: read and write contents,
//! and read and write each character's non-break flag.

use crate::error::Result;

/// An ordered run of characters in a host document
///
/// Writing contents with [`TextRange::set_contents`] must leave the range
/// with one addressable character per `char` of the written string.
pub trait TextRange {
    /// Concatenated contents of every character
    fn contents(&self) -> String;

    /// Replace the contents of the range
    fn set_contents(&mut self, contents: &str);

    /// Number of addressable characters
    fn character_count(&self) -> usize;

    /// Non-break flag of the character at `index`, `None` if out of range
    fn is_no_break(&self, index: usize) -> Option<bool>;

    /// Set the non-break flag of the character at `index`
    fn set_no_break(&mut self, index: usize, no_break: bool) -> Result<()>;

    /// Set the non-break flag of every character
    fn set_all_no_break(&mut self, no_break: bool) -> Result<()> {
        for index in 0..self.character_count() {
            self.set_no_break(index, no_break)?;
        }
        Ok(())
    }

    /// True iff every character is non-breaking
    fn no_break(&self) -> bool {
        (0..self.character_count()).all(|index| self.is_no_break(index) == Some(true))
    }
}

/// An item in a multi-item selection (a text frame, a shape, ...)
pub trait SelectionItem {
    /// The item's text, or `None` for items without textual content
    fn text_range_mut(&mut self) -> Option<&mut dyn TextRange>;
}
