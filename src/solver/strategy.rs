//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! only ranks live candidates that have not been guessed yet, so a guess can
//! never repeat and never leaves the consistent set.

use super::candidates::CandidateSet;
use super::metrics::expected_remaining;
use super::pairs::PairDistances;
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::fmt;

/// A ranked guess candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    /// Arena index in the candidate set
    pub index: usize,
    /// Strategy-specific score (see each strategy)
    pub score: f64,
}

/// A strategy for ranking the remaining candidates
pub trait Strategy {
    /// Whether `rank` reads the pair distance cache
    ///
    /// When false the session skips the O(n²) cache refresh.
    fn needs_pairs(&self) -> bool {
        true
    }

    /// Rank live candidates not in `exclude`, best guess first
    fn rank<'a>(
        &self,
        candidates: &'a CandidateSet,
        pairs: &PairDistances,
        exclude: &[Word],
    ) -> Vec<ScoredGuess<'a>>;

    /// Select the best guess, or `None` if nothing is eligible
    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
        pairs: &PairDistances,
        exclude: &[Word],
    ) -> Option<&'a Word> {
        self.rank(candidates, pairs, exclude)
            .first()
            .map(|scored| scored.word)
    }
}

/// Live candidates that have not been guessed, in canonical order
fn eligible<'a>(candidates: &'a CandidateSet, exclude: &[Word]) -> Vec<(usize, &'a Word)> {
    candidates
        .live_indices()
        .map(|i| (i, candidates.word(i)))
        .filter(|(_, word)| !exclude.contains(word))
        .collect()
}

/// Score every eligible candidate by its average distance to live peers
fn by_average_distance<'a>(
    candidates: &'a CandidateSet,
    pairs: &PairDistances,
    exclude: &[Word],
) -> Vec<ScoredGuess<'a>> {
    pairs
        .peer_averages(candidates)
        .into_iter()
        .map(|(index, score)| ScoredGuess {
            word: candidates.word(index),
            index,
            score,
        })
        .filter(|scored| !exclude.contains(scored.word))
        .collect()
}

/// Sort by score in the given direction, ties by canonical word order
fn sort_ranked(ranked: &mut [ScoredGuess<'_>], descending: bool) {
    ranked.sort_by(|a, b| {
        let by_score = if descending {
            b.score.total_cmp(&a.score)
        } else {
            a.score.total_cmp(&b.score)
        };
        by_score.then(a.index.cmp(&b.index))
    });
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyType {
    /// Highest average distance to peers first (default)
    Spread(SpreadStrategy),
    /// Lowest average distance to peers first
    Central(CentralStrategy),
    /// Fewest expected remaining candidates first
    Partition(PartitionStrategy),
    /// Seeded shuffle of the eligible candidates
    Random(RandomStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Spread(SpreadStrategy)
    }
}

impl Strategy for StrategyType {
    fn needs_pairs(&self) -> bool {
        match self {
            Self::Spread(s) => s.needs_pairs(),
            Self::Central(s) => s.needs_pairs(),
            Self::Partition(s) => s.needs_pairs(),
            Self::Random(s) => s.needs_pairs(),
        }
    }

    fn rank<'a>(
        &self,
        candidates: &'a CandidateSet,
        pairs: &PairDistances,
        exclude: &[Word],
    ) -> Vec<ScoredGuess<'a>> {
        match self {
            Self::Spread(s) => s.rank(candidates, pairs, exclude),
            Self::Central(s) => s.rank(candidates, pairs, exclude),
            Self::Partition(s) => s.rank(candidates, pairs, exclude),
            Self::Random(s) => s.rank(candidates, pairs, exclude),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "spread", "central", "partition", "random".
    /// Defaults to spread if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "central" | "dense" => Self::Central(CentralStrategy),
            "partition" | "expected" => Self::Partition(PartitionStrategy),
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Spread(SpreadStrategy),
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Spread(_) => "spread",
            Self::Central(_) => "central",
            Self::Partition(_) => "partition",
            Self::Random(_) => "random",
        }
    }

    /// What the score column means for this strategy
    #[must_use]
    pub const fn score_label(&self) -> &'static str {
        match self {
            Self::Spread(_) | Self::Central(_) => "avg distance",
            Self::Partition(_) => "expected left",
            Self::Random(_) => "draw",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spread strategy
///
/// A word that sits in a dense cluster tells little apart when it misses; a
/// word far from its peers on average tends to produce feedback that splits
/// the candidates sharply. Ranks by descending average peer distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpreadStrategy;

impl Strategy for SpreadStrategy {
    fn rank<'a>(
        &self,
        candidates: &'a CandidateSet,
        pairs: &PairDistances,
        exclude: &[Word],
    ) -> Vec<ScoredGuess<'a>> {
        let mut ranked = by_average_distance(candidates, pairs, exclude);
        sort_ranked(&mut ranked, true);
        ranked
    }
}

/// Central strategy
///
/// Ranks by ascending average peer distance: the most central word first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CentralStrategy;

impl Strategy for CentralStrategy {
    fn rank<'a>(
        &self,
        candidates: &'a CandidateSet,
        pairs: &PairDistances,
        exclude: &[Word],
    ) -> Vec<ScoredGuess<'a>> {
        let mut ranked = by_average_distance(candidates, pairs, exclude);
        sort_ranked(&mut ranked, false);
        ranked
    }
}

/// Partition strategy
///
/// Ranks by ascending expected number of candidates left after the guess,
/// computed from the full signature partition of the live candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionStrategy;

impl Strategy for PartitionStrategy {
    fn needs_pairs(&self) -> bool {
        false
    }

    fn rank<'a>(
        &self,
        candidates: &'a CandidateSet,
        _pairs: &PairDistances,
        exclude: &[Word],
    ) -> Vec<ScoredGuess<'a>> {
        let pool: Vec<&Word> = candidates.live_words().collect();

        let mut ranked: Vec<ScoredGuess<'a>> = eligible(candidates, exclude)
            .into_par_iter()
            .map(|(index, word)| ScoredGuess {
                word,
                index,
                score: expected_remaining(word, &pool),
            })
            .collect();

        sort_ranked(&mut ranked, false);
        ranked
    }
}

/// Random strategy
///
/// Shuffles the eligible candidates with a generator seeded from the
/// configured seed and the current candidate count, so the same game state
/// always yields the same guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy {
    pub seed: u64,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Strategy for RandomStrategy {
    fn needs_pairs(&self) -> bool {
        false
    }

    fn rank<'a>(
        &self,
        candidates: &'a CandidateSet,
        _pairs: &PairDistances,
        exclude: &[Word],
    ) -> Vec<ScoredGuess<'a>> {
        let mut pool = eligible(candidates, exclude);
        let mut rng = StdRng::seed_from_u64(self.seed ^ (candidates.len() as u64).rotate_left(32));
        pool.shuffle(&mut rng);

        pool.into_iter()
            .enumerate()
            .map(|(draw, (index, word))| ScoredGuess {
                word,
                index,
                score: draw as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(words: &[&str]) -> (CandidateSet, PairDistances) {
        let candidates = CandidateSet::new(words.iter().map(|w| Word::new(*w).unwrap()));
        let mut pairs = PairDistances::new();
        pairs.refresh(&candidates);
        (candidates, pairs)
    }

    fn ranked_texts(ranked: &[ScoredGuess<'_>]) -> Vec<String> {
        ranked.iter().map(|s| s.word.text().to_string()).collect()
    }

    #[test]
    fn spread_prefers_outliers() {
        // ab=1.5, abc=1.0, abcd=1.5 -> ties broken by word order
        let (candidates, pairs) = setup(&["ab", "abc", "abcd"]);
        let ranked = SpreadStrategy.rank(&candidates, &pairs, &[]);
        assert_eq!(ranked_texts(&ranked), ["ab", "abcd", "abc"]);
        assert!((ranked[0].score - 1.5).abs() < 1e-9);
    }

    #[test]
    fn central_prefers_cluster_middle() {
        let (candidates, pairs) = setup(&["ab", "abc", "abcd"]);
        let best = CentralStrategy.select_guess(&candidates, &pairs, &[]);
        assert_eq!(best.map(Word::text), Some("abc"));
    }

    #[test]
    fn excluded_words_are_never_ranked() {
        let (candidates, pairs) = setup(&["ab", "abc", "abcd"]);
        let exclude = vec![Word::new("ab").unwrap()];

        for strategy in [
            StrategyType::from_name("spread", 0),
            StrategyType::from_name("central", 0),
            StrategyType::from_name("partition", 0),
            StrategyType::from_name("random", 7),
        ] {
            let ranked = strategy.rank(&candidates, &pairs, &exclude);
            assert_eq!(ranked.len(), 2, "{strategy}");
            assert!(ranked.iter().all(|s| s.word.text() != "ab"), "{strategy}");
        }
    }

    #[test]
    fn partition_ranks_by_expected_remaining() {
        // "act" and "cat" both give every candidate its own signature
        let (candidates, pairs) = setup(&["bat", "cat", "cart", "act"]);
        let ranked = PartitionStrategy.rank(&candidates, &pairs, &[]);

        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].word.text(), "act");
        assert!((ranked[0].score - 1.0).abs() < 1e-9);
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let (candidates, pairs) = setup(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let first = RandomStrategy::new(42).rank(&candidates, &pairs, &[]);
        let second = RandomStrategy::new(42).rank(&candidates, &pairs, &[]);
        assert_eq!(ranked_texts(&first), ranked_texts(&second));
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn from_name_defaults_to_spread() {
        assert_eq!(StrategyType::from_name("unknown", 0).name(), "spread");
        assert_eq!(StrategyType::from_name("partition", 0).name(), "partition");
        assert_eq!(StrategyType::default().name(), "spread");
        assert!(!StrategyType::from_name("random", 1).needs_pairs());
        assert!(StrategyType::from_name("central", 1).needs_pairs());
    }

    #[test]
    fn select_returns_none_when_nothing_eligible() {
        let (candidates, pairs) = setup(&["solo"]);
        let exclude = vec![Word::new("solo").unwrap()];
        assert!(SpreadStrategy.select_guess(&candidates, &pairs, &exclude).is_none());
    }
}
