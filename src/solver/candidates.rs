//! Shrinking candidate set
//!
//! Words live in a sorted arena for the whole game; filtering only flips
//! live flags, so arena indices stay stable and can key the pair cache.

use crate::core::{Signature, Word};
use rayon::prelude::*;

/// Words still consistent with every feedback round
#[derive(Debug, Clone)]
pub struct CandidateSet {
    words: Vec<Word>,
    live: Vec<bool>,
    live_count: usize,
}

impl CandidateSet {
    /// Create a candidate set from a dictionary
    ///
    /// Words are sorted into canonical order and duplicates are dropped.
    #[must_use]
    pub fn new(dictionary: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = dictionary.into_iter().collect();
        words.sort();
        words.dedup();

        let live_count = words.len();
        Self {
            live: vec![true; live_count],
            words,
            live_count,
        }
    }

    /// Number of live candidates
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Size of the original dictionary (live or not)
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.words.len()
    }

    /// Word at an arena index
    ///
    /// # Panics
    /// Panics if `index >= total()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn is_live(&self, index: usize) -> bool {
        self.live.get(index).copied().unwrap_or(false)
    }

    /// Arena index of a word, live or not
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.words.binary_search(word).ok()
    }

    /// Check if a word is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index_of(word).is_some_and(|i| self.live[i])
    }

    /// Arena indices of live candidates, in canonical order
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.live
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then_some(i))
    }

    /// Live candidates, in canonical order
    pub fn live_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.live_indices().map(|i| &self.words[i])
    }

    /// Remove every candidate whose signature against `guess` differs
    /// from the reported one
    ///
    /// Returns the number of words removed. Removed words never come back.
    pub fn retain_consistent(&mut self, guess: &Word, signature: &Signature) -> usize {
        let live: Vec<usize> = self.live_indices().collect();

        let rejected: Vec<usize> = live
            .par_iter()
            .filter(|&&i| Signature::calculate(guess, &self.words[i]) != *signature)
            .copied()
            .collect();

        for &i in &rejected {
            self.live[i] = false;
        }
        self.live_count -= rejected.len();

        rejected.len()
    }

    /// Shortest and longest live word, if any remain
    #[must_use]
    pub fn length_range(&self) -> Option<(usize, usize)> {
        self.live_words().fold(None, |range, word| {
            let len = word.len();
            Some(match range {
                None => (len, len),
                Some((lo, hi)) => (lo.min(len), hi.max(len)),
            })
        })
    }
}
