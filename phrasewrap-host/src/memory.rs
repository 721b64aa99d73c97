//! In-memory host document
//!
//! A small host implementation used by the CLI and by tests. Writing
//! contents re-splits the range into one [`Character`] per `char`, the same
//! normalisation a real host performs. Re-split characters keep the
//! attributes of the character previously at their index, or of the last
//! character when the range grows.

use crate::error::{HostError, Result};
use crate::selection::{Document, Selection};
use crate::text_range::{SelectionItem, TextRange};
use std::collections::BTreeMap;

/// One character of a text range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// The character itself
    pub contents: char,
    /// Whether the host may break a line at this character
    pub no_break: bool,
    /// Other per-character attributes (font, size, ...)
    pub attributes: BTreeMap<String, String>,
}

impl Character {
    /// A breakable character with no attributes
    pub fn new(contents: char) -> Self {
        Self {
            contents,
            no_break: false,
            attributes: BTreeMap::new(),
        }
    }
}

/// Text range backed by a vector of characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTextRange {
    characters: Vec<Character>,
}

impl MemoryTextRange {
    /// Create a range holding `contents`
    pub fn new(contents: &str) -> Self {
        Self {
            characters: contents.chars().map(Character::new).collect(),
        }
    }

    /// The characters of the range
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Mutable access to the characters, for attribute edits
    pub fn characters_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    /// Non-break flag of every character, in order
    pub fn no_break_flags(&self) -> Vec<bool> {
        self.characters.iter().map(|c| c.no_break).collect()
    }
}

impl TextRange for MemoryTextRange {
    fn contents(&self) -> String {
        self.characters.iter().map(|c| c.contents).collect()
    }

    fn set_contents(&mut self, contents: &str) {
        let previous = std::mem::take(&mut self.characters);
        self.characters = contents
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                let mut character = Character::new(ch);
                if let Some(source) = previous.get(index).or(previous.last()) {
                    character.attributes = source.attributes.clone();
                }
                character
            })
            .collect();
    }

    fn character_count(&self) -> usize {
        self.characters.len()
    }

    fn is_no_break(&self, index: usize) -> Option<bool> {
        self.characters.get(index).map(|c| c.no_break)
    }

    fn set_no_break(&mut self, index: usize, no_break: bool) -> Result<()> {
        let len = self.characters.len();
        let character = self
            .characters
            .get_mut(index)
            .ok_or(HostError::CharacterOutOfRange { index, len })?;
        character.no_break = no_break;
        Ok(())
    }
}

/// A selectable page item; `text` is `None` for items without text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    /// The frame's text, if any
    pub text: Option<MemoryTextRange>,
}

impl TextFrame {
    /// A frame holding `contents`
    pub fn with_text(contents: &str) -> Self {
        Self {
            text: Some(MemoryTextRange::new(contents)),
        }
    }

    /// An item without textual content
    pub fn empty() -> Self {
        Self { text: None }
    }
}

impl SelectionItem for TextFrame {
    fn text_range_mut(&mut self) -> Option<&mut dyn TextRange> {
        self.text.as_mut().map(|range| range as &mut dyn TextRange)
    }
}

/// What is currently selected in a [`MemoryDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MemorySelection {
    /// Nothing selected
    #[default]
    None,
    /// A single text range
    Range(MemoryTextRange),
    /// Several page items
    Items(Vec<TextFrame>),
}

/// Document with a single active selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    /// The active selection
    pub selection: MemorySelection,
}

impl MemoryDocument {
    /// A document whose selection is `selection`
    pub fn new(selection: MemorySelection) -> Self {
        Self { selection }
    }
}

impl Document for MemoryDocument {
    fn selection(&mut self) -> Selection<'_> {
        match &mut self.selection {
            MemorySelection::None => Selection::Empty,
            MemorySelection::Range(range) => Selection::Range(range),
            MemorySelection::Items(items) => Selection::Items(
                items
                    .iter_mut()
                    .map(|item| item as &mut dyn SelectionItem)
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_contents_resplits() {
        let mut range = MemoryTextRange::new("ab");
        range.set_no_break(0, true).unwrap();

        range.set_contents("xyz");
        assert_eq!(range.character_count(), 3);
        assert_eq!(range.contents(), "xyz");
        assert_eq!(range.no_break_flags(), vec![false, false, false]);
    }

    fn font(name: &str) -> BTreeMap<String, String> {
        BTreeMap::from([("font".to_string(), name.to_string())])
    }

    #[test]
    fn test_set_contents_keeps_attributes() {
        let mut range = MemoryTextRange::new("ab");
        range.characters_mut()[0].attributes = font("Mincho");
        range.characters_mut()[1].attributes = font("Gothic");

        range.set_contents("xyz");
        let fonts: Vec<_> = range.characters().iter().map(|c| &c.attributes).collect();
        assert_eq!(fonts, vec![&font("Mincho"), &font("Gothic"), &font("Gothic")]);
    }

    #[test]
    fn test_set_contents_on_empty_range() {
        let mut range = MemoryTextRange::new("");
        range.set_contents("ab");
        assert!(range.characters().iter().all(|c| c.attributes.is_empty()));
    }

    #[test]
    fn test_no_break_aggregate() {
        let mut range = MemoryTextRange::new("ab");
        assert!(!range.no_break());

        range.set_all_no_break(true).unwrap();
        assert!(range.no_break());

        range.set_no_break(1, false).unwrap();
        assert!(!range.no_break());
        assert!(MemoryTextRange::new("").no_break());
    }

    #[test]
    fn test_set_no_break_out_of_range() {
        let mut range = MemoryTextRange::new("ab");
        let err = range.set_no_break(2, true).unwrap_err();
        assert!(matches!(
            err,
            HostError::CharacterOutOfRange { index: 2, len: 2 }
        ));
        assert_eq!(range.is_no_break(2), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let range = MemoryTextRange::new("日本語");
        assert_eq!(range.character_count(), 3);
        assert_eq!(range.characters()[1].contents, '本');
    }

    #[test]
    fn test_document_selection_shapes() {
        let mut doc = MemoryDocument::default();
        assert!(matches!(doc.selection(), Selection::Empty));

        let mut doc = MemoryDocument::new(MemorySelection::Range(MemoryTextRange::new("a")));
        assert!(matches!(doc.selection(), Selection::Range(_)));

        let mut doc = MemoryDocument::new(MemorySelection::Items(vec![
            TextFrame::with_text("a"),
            TextFrame::empty(),
        ]));
        match doc.selection() {
            Selection::Items(items) => assert_eq!(items.len(), 2),
            _ => panic!("expected items"),
        }
    }
}
