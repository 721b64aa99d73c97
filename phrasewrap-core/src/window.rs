//! Six-character context window around a boundary candidate
//!
//! A boundary candidate sits between two characters. The window holds the
//! three characters before it and the three characters after it:
//! `[w1, w2, w3 | w4, w5, w6]`. Slots that fall outside the text are
//! [`Slot::Invalid`].

use std::fmt;

/// One position in the context window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A character from the source text
    Char(char),
    /// Out of bounds of the source text
    Invalid,
}

impl Slot {
    /// Returns the character, or `None` for the sentinel
    pub fn as_char(self) -> Option<char> {
        match self {
            Slot::Char(ch) => Some(ch),
            Slot::Invalid => None,
        }
    }

    /// True when this slot is the out-of-bounds sentinel
    pub fn is_invalid(self) -> bool {
        matches!(self, Slot::Invalid)
    }
}

impl From<char> for Slot {
    fn from(ch: char) -> Self {
        Slot::Char(ch)
    }
}

impl From<Option<char>> for Slot {
    fn from(ch: Option<char>) -> Self {
        ch.map_or(Slot::Invalid, Slot::Char)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Char(ch) => write!(f, "{ch}"),
            Slot::Invalid => f.write_str("<invalid>"),
        }
    }
}

/// The six slots around a boundary candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    slots: [Slot; 6],
}

impl ContextWindow {
    /// Build a window from explicit slots `w1..w6`
    pub fn new(slots: [Slot; 6]) -> Self {
        Self { slots }
    }

    /// Window for the boundary immediately before `chars[index]`
    ///
    /// Offsets `index-3 ..= index+2` map to `w1..w6`. Anything outside
    /// `chars` becomes [`Slot::Invalid`].
    pub fn at(chars: &[char], index: usize) -> Self {
        let slot = |offset: isize| -> Slot {
            let pos = index as isize + offset;
            if pos < 0 {
                Slot::Invalid
            } else {
                chars.get(pos as usize).copied().into()
            }
        };

        Self {
            slots: [slot(-3), slot(-2), slot(-1), slot(0), slot(1), slot(2)],
        }
    }

    /// All six slots in order
    pub fn slots(&self) -> [Slot; 6] {
        self.slots
    }

    /// Slot `w<n>` for `n` in `1..=6`
    pub fn get(&self, n: usize) -> Option<Slot> {
        n.checked_sub(1).and_then(|i| self.slots.get(i)).copied()
    }

    /// Character right before the boundary (`w3`)
    pub fn before(&self) -> Slot {
        self.slots[2]
    }

    /// Character right after the boundary (`w4`)
    pub fn after(&self) -> Slot {
        self.slots[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_window_in_the_middle() {
        let text = chars("abcdefg");
        let window = ContextWindow::at(&text, 3);
        assert_eq!(
            window.slots(),
            ['a', 'b', 'c', 'd', 'e', 'f'].map(Slot::Char)
        );
        assert_eq!(window.before(), Slot::Char('c'));
        assert_eq!(window.after(), Slot::Char('d'));
    }

    #[test]
    fn test_window_near_start() {
        let text = chars("abcd");
        let window = ContextWindow::at(&text, 1);
        assert_eq!(window.get(1), Some(Slot::Invalid));
        assert_eq!(window.get(2), Some(Slot::Invalid));
        assert_eq!(window.get(3), Some(Slot::Char('a')));
        assert_eq!(window.get(4), Some(Slot::Char('b')));
        assert_eq!(window.get(6), Some(Slot::Char('d')));
    }

    #[test]
    fn test_window_near_end() {
        let text = chars("abc");
        let window = ContextWindow::at(&text, 2);
        assert_eq!(window.before(), Slot::Char('b'));
        assert_eq!(window.after(), Slot::Char('c'));
        assert!(window.get(5).is_some_and(Slot::is_invalid));
        assert!(window.get(6).is_some_and(Slot::is_invalid));
    }

    #[test]
    fn test_get_out_of_range() {
        let window = ContextWindow::new([Slot::Invalid; 6]);
        assert_eq!(window.get(0), None);
        assert_eq!(window.get(7), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let text = chars("今日は天気です");
        let window = ContextWindow::at(&text, 3);
        assert_eq!(window.before(), Slot::Char('は'));
        assert_eq!(window.after(), Slot::Char('天'));
        assert_eq!(window.get(1).and_then(Slot::as_char), Some('今'));
    }

    #[test]
    fn test_slot_conversions() {
        assert_eq!(Slot::from(Some('x')), Slot::Char('x'));
        assert_eq!(Slot::from(None), Slot::Invalid);
        assert_eq!(Slot::Char('x').to_string(), "x");
        assert_eq!(Slot::Invalid.as_char(), None);
    }
}
