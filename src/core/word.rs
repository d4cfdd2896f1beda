//! Distle word representation
//!
//! A Word stores the lowercase text together with its characters, so the
//! distance engine can index positions without re-decoding UTF-8.

use std::fmt;
use thiserror::Error;

/// A dictionary word of any (non-zero) length
///
/// Equality, ordering and hashing follow the normalized text, which also
/// gives the canonical dictionary order used for deterministic choices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use distle_solver::core::Word;
    ///
    /// let word = Word::new("Kitten").unwrap();
    /// assert_eq!(word.text(), "kitten");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("sitting").unwrap();
        assert_eq!(word.text(), "sitting");
        assert_eq!(word.len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("KITTEN").unwrap();
        assert_eq!(word.text(), "kitten");
        assert_eq!(Word::new("KiTtEn").unwrap(), word);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ca7"), Err(WordError::InvalidCharacter('7')));
        assert_eq!(Word::new("a b"), Err(WordError::InvalidCharacter(' ')));
        assert!(Word::new("cat!").is_err());
    }

    #[test]
    fn word_non_ascii_letters_count_as_chars() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.char_at(3), 'é');
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("act").unwrap();
        assert_eq!(word.char_at(0), 'a');
        assert_eq!(word.char_at(1), 'c');
        assert_eq!(word.char_at(2), 't');
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("cat").unwrap(),
            Word::new("act").unwrap(),
            Word::new("bat").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["act", "bat", "cat"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
    }

    #[test]
    fn word_from_str() {
        let word: Word = "Dog".parse().unwrap();
        assert_eq!(word.text(), "dog");
    }
}
