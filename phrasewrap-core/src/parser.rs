//! Boundary scoring and phrase segmentation
//!
//! For every position `i` in `1..len`, the window around the boundary
//! before `chars[i]` is scored as
//!
//! ```text
//! score = -Σ(all weights) + 2 × Σ(weights of the window's features)
//! ```
//!
//! and a new phrase starts at `i` when the score is strictly positive.
//! The pass is greedy and left to right; every decision is final.

use crate::feature::extract_window;
use crate::model::{Weight, WeightTable};
use crate::window::ContextWindow;

/// Phrase segmenter over a borrowed weight table
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    weights: &'a WeightTable,
}

impl<'a> Parser<'a> {
    /// Create a parser that reads from `weights`
    pub fn new(weights: &'a WeightTable) -> Self {
        Self { weights }
    }

    /// The weight table this parser scores with
    pub fn weights(&self) -> &'a WeightTable {
        self.weights
    }

    /// Bias applied to every boundary candidate: the negated table total
    pub fn base_score(&self) -> Weight {
        -self.weights.total_weight()
    }

    /// Raw score of the boundary before `chars[index]`
    pub fn score_at(&self, chars: &[char], index: usize) -> Weight {
        self.score_with_base(self.base_score(), chars, index)
    }

    fn score_with_base(&self, base_score: Weight, chars: &[char], index: usize) -> Weight {
        extract_window(&ContextWindow::at(chars, index))
            .iter()
            .fold(base_score, |score, token| {
                score + 2.0 * self.weights.get(token)
            })
    }

    /// Character offsets where a new phrase starts, excluding offset 0
    pub fn boundaries(&self, sentence: &str) -> Vec<usize> {
        let chars: Vec<char> = sentence.chars().collect();
        self.boundaries_in(&chars)
    }

    fn boundaries_in(&self, chars: &[char]) -> Vec<usize> {
        let base_score = self.base_score();
        (1..chars.len())
            .filter(|&i| self.score_with_base(base_score, chars, i) > 0.0)
            .collect()
    }

    /// Split `sentence` into phrases
    ///
    /// The result is empty for an empty sentence. Otherwise every phrase is
    /// non-empty and the phrases concatenate back to `sentence`.
    pub fn parse(&self, sentence: &str) -> Vec<String> {
        let chars: Vec<char> = sentence.chars().collect();
        let Some(&first) = chars.first() else {
            return Vec::new();
        };

        let mut phrases = vec![String::from(first)];
        let mut boundaries = self.boundaries_in(&chars).into_iter().peekable();

        for (i, &ch) in chars.iter().enumerate().skip(1) {
            if boundaries.next_if_eq(&i).is_some() {
                phrases.push(String::new());
            }
            if let Some(last) = phrases.last_mut() {
                last.push(ch);
            }
        }

        log::trace!(
            "Segmented {} chars into {} phrases",
            chars.len(),
            phrases.len()
        );
        phrases
    }
}

/// Split `sentence` into phrases using `weights`
pub fn segment(weights: &WeightTable, sentence: &str) -> Vec<String> {
    Parser::new(weights).parse(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SENTENCE: &str = "abcdeabcd";

    fn table(entries: &[(&str, Weight)]) -> WeightTable {
        entries.iter().map(|&(k, w)| (k, w)).collect()
    }

    #[test]
    fn test_strong_feature_splits() {
        // "UW4:a" means a phrase starts right before 'a'
        let weights = table(&[("UW4:a", 10_000.0)]);
        assert_eq!(segment(&weights, TEST_SENTENCE), vec!["abcde", "abcd"]);
    }

    #[test]
    fn test_single_character_phrase() {
        let weights = table(&[("UW4:b", 10_000.0)]);
        assert_eq!(
            segment(&weights, TEST_SENTENCE),
            vec!["a", "bcdea", "bcd"]
        );
    }

    #[test]
    fn test_empty_sentence() {
        assert!(segment(&WeightTable::new(), "").is_empty());
    }

    #[test]
    fn test_empty_table_never_splits() {
        assert_eq!(
            segment(&WeightTable::new(), TEST_SENTENCE),
            vec![TEST_SENTENCE]
        );
    }

    #[test]
    fn test_single_character() {
        let weights = table(&[("UW4:a", 10_000.0)]);
        assert_eq!(segment(&weights, "a"), vec!["a"]);
    }

    #[test]
    fn test_zero_score_does_not_split() {
        // base = -2, hit contributes +2 => score 0 exactly
        let weights = table(&[("UW4:b", 1.0), ("UW1:z", 1.0)]);
        let parser = Parser::new(&weights);
        let chars: Vec<char> = "ab".chars().collect();
        assert_eq!(parser.score_at(&chars, 1), 0.0);
        assert_eq!(parser.parse("ab"), vec!["ab"]);
    }

    #[test]
    fn test_base_score_uses_whole_table() {
        let weights = table(&[("UW4:a", 10.0), ("UW4:b", -3.0), ("TW1:xyz", 7.0)]);
        assert_eq!(Parser::new(&weights).base_score(), -14.0);
    }

    #[test]
    fn test_score_at() {
        let weights = table(&[("UW4:a", 10_000.0)]);
        let parser = Parser::new(&weights);
        let chars: Vec<char> = TEST_SENTENCE.chars().collect();
        assert_eq!(parser.score_at(&chars, 5), 10_000.0);
        assert_eq!(parser.score_at(&chars, 1), -10_000.0);
    }

    #[test]
    fn test_boundaries_agree_with_parse() {
        let weights = table(&[("UW4:b", 10_000.0)]);
        let parser = Parser::new(&weights);
        assert_eq!(parser.boundaries(TEST_SENTENCE), vec![1, 6]);
    }

    #[test]
    fn test_multibyte_sentence() {
        let weights = table(&[("UW4:天", 500.0), ("UW3:は", 500.0)]);
        let phrases = segment(&weights, "今日は天気です。");
        assert_eq!(phrases, vec!["今日は", "天気です。"]);
    }

    #[test]
    fn test_same_table_segments_the_same_way_every_time() {
        let entries = [("UW4:a", 1e16), ("UW4:b", 1.0), ("UW4:c", -1e16), ("UW3:x", 0.5)];
        let expected = segment(&entries.into_iter().collect(), "xaxb");

        for _ in 0..50 {
            let forward: WeightTable = entries.into_iter().collect();
            let backward: WeightTable = entries.into_iter().rev().collect();
            assert_eq!(segment(&forward, "xaxb"), expected);
            assert_eq!(segment(&backward, "xaxb"), expected);
        }
    }

    #[test]
    fn test_fractional_weights() {
        // base = -0.75, hit at 'b' scores -0.75 + 2 * 0.5 = 0.25
        let weights = table(&[("UW4:b", 0.5), ("UW1:z", 0.25)]);
        assert_eq!(segment(&weights, "abab"), vec!["a", "ba", "b"]);
    }

    #[test]
    fn test_bigram_and_trigram_weights() {
        let weights = table(&[("BW2:cd", 50.0), ("TW2:bcd", 50.0), ("UW1:q", 20.0)]);
        // Only the boundary between 'c' and 'd' collects both hits:
        // -120 + 2 * 100 = 80
        assert_eq!(segment(&weights, "abcdef"), vec!["abc", "def"]);
    }
}
