//! Guess metrics
//!
//! Given a guess and the live candidates, measures how the feedback would
//! split them. Used by the partition strategy and by the analysis output.

use crate::core::{Signature, Word, word_distance};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess against a candidate pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Mean edit distance from the guess to the other candidates
    pub average_distance: f64,
    /// Shannon entropy of the signature distribution (bits)
    pub entropy: f64,
    /// Expected number of candidates left after the feedback
    pub expected_remaining: f64,
    /// Largest group sharing one signature (worst case)
    pub max_partition: usize,
    /// Number of distinct signatures
    pub partitions: usize,
}

/// Group candidates by the signature they produce against the guess
#[must_use]
pub fn group_by_signature(guess: &Word, candidates: &[&Word]) -> FxHashMap<Signature, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts
            .entry(Signature::calculate(guess, candidate))
            .or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a partition given its group sizes
///
/// H = -Σ p * log₂(p)
#[must_use]
pub fn shannon_entropy(sizes: impl IntoIterator<Item = usize>) -> f64 {
    let sizes: Vec<usize> = sizes.into_iter().filter(|&n| n > 0).collect();
    let total = sizes.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Mean distance from `guess` to every candidate other than itself
#[must_use]
pub fn average_distance(guess: &Word, candidates: &[&Word]) -> f64 {
    let (sum, count) = candidates
        .iter()
        .filter(|&&c| c != guess)
        .fold((0usize, 0usize), |(sum, count), &c| {
            (sum + word_distance(guess, c), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Expected number of candidates remaining after guessing `guess`
///
/// Σ p(s) · |s| over signature groups s.
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total = candidates.len() as f64;
    group_by_signature(guess, candidates)
        .values()
        .map(|&n| (n * n) as f64 / total)
        .sum()
}

/// Calculate all metrics for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            average_distance: 0.0,
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let groups = group_by_signature(guess, candidates);
    let total = candidates.len() as f64;

    GuessMetrics {
        average_distance: average_distance(guess, candidates),
        entropy: shannon_entropy(groups.values().copied()),
        expected_remaining: groups.values().map(|&n| (n * n) as f64 / total).sum(),
        max_partition: groups.values().copied().max().unwrap_or(0),
        partitions: groups.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn distinct_signatures_split_fully() {
        let pool = words(&["cat", "act", "cart", "bat"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("cat").unwrap();

        let metrics = calculate_metrics(&guess, &refs);

        // cat -> "", act -> T, cart -> I, bat -> R
        assert_eq!(metrics.partitions, 4);
        assert_eq!(metrics.max_partition, 1);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert!((metrics.entropy - 2.0).abs() < 1e-9);
        assert!((metrics.average_distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identical_signatures_do_not_split() {
        let pool = words(&["bat", "hat", "mat"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("cat").unwrap();

        let metrics = calculate_metrics(&guess, &refs);

        assert_eq!(metrics.partitions, 1);
        assert_eq!(metrics.max_partition, 3);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-9);
        assert!(metrics.entropy.abs() < 1e-9);
    }

    #[test]
    fn expected_remaining_matches_metrics() {
        let pool = words(&["bat", "hat", "act", "dog"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("cat").unwrap();

        // {bat, hat} share R; act and dog are alone: (4 + 1 + 1) / 4
        assert!((expected_remaining(&guess, &refs) - 1.5).abs() < 1e-9);
        assert!(
            (calculate_metrics(&guess, &refs).expected_remaining - 1.5).abs() < 1e-9
        );
    }

    #[test]
    fn average_distance_skips_self() {
        let pool = words(&["ab", "abc", "abcd"]);
        let refs: Vec<&Word> = pool.iter().collect();
        assert!((average_distance(&pool[0], &refs) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn shannon_entropy_uniform() {
        assert!((shannon_entropy([25, 25, 25, 25]) - 2.0).abs() < 1e-9);
        assert!(shannon_entropy([10]).abs() < 1e-9);
        assert!(shannon_entropy(std::iter::empty()).abs() < 1e-9);
    }

    #[test]
    fn empty_pool_yields_zero_metrics() {
        let guess = Word::new("cat").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.partitions, 0);
        assert_eq!(metrics.max_partition, 0);
    }
}
