//! Pairwise distance cache
//!
//! Distances between live candidates, keyed by an unordered pair of arena
//! indices. Pairs touching a removed word are dropped before every refresh,
//! so stale distances never influence scoring.

use super::candidates::CandidateSet;
use crate::core::word_distance;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Unordered pair of distinct arena indices
///
/// `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: usize,
    high: usize,
}

impl PairKey {
    /// Create a key; argument order does not matter
    #[inline]
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "a word is not paired with itself");
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    #[inline]
    #[must_use]
    pub const fn low(self) -> usize {
        self.low
    }

    #[inline]
    #[must_use]
    pub const fn high(self) -> usize {
        self.high
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.low == index || self.high == index
    }
}

/// Symmetric cache of candidate-to-candidate edit distances
#[derive(Debug, Clone, Default)]
pub struct PairDistances {
    distances: FxHashMap<PairKey, usize>,
}

impl PairDistances {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Cached distance between two arena indices
    #[must_use]
    pub fn get(&self, a: usize, b: usize) -> Option<usize> {
        if a == b {
            return Some(0);
        }
        self.distances.get(&PairKey::new(a, b)).copied()
    }

    /// Drop every pair with a member that is no longer live
    ///
    /// Returns the number of pairs dropped.
    pub fn prune(&mut self, candidates: &CandidateSet) -> usize {
        let before = self.distances.len();
        self.distances
            .retain(|key, _| candidates.is_live(key.low) && candidates.is_live(key.high));
        before - self.distances.len()
    }

    /// Prune, then compute every missing pair among live candidates
    ///
    /// Returns the number of newly computed pairs.
    pub fn refresh(&mut self, candidates: &CandidateSet) -> usize {
        self.prune(candidates);

        let live: Vec<usize> = candidates.live_indices().collect();
        let missing: Vec<PairKey> = live
            .iter()
            .enumerate()
            .flat_map(|(n, &a)| live[n + 1..].iter().map(move |&b| PairKey::new(a, b)))
            .filter(|key| !self.distances.contains_key(key))
            .collect();

        let computed: Vec<(PairKey, usize)> = missing
            .into_par_iter()
            .map(|key| {
                let distance = word_distance(candidates.word(key.low), candidates.word(key.high));
                (key, distance)
            })
            .collect();

        let added = computed.len();
        self.distances.extend(computed);

        tracing::debug!(
            live = live.len(),
            added,
            cached = self.distances.len(),
            "refreshed pair distances"
        );

        added
    }

    /// Average cached distance from one live candidate to its live peers
    ///
    /// Returns `None` if `index` is not live or a pair is missing from the
    /// cache.
    #[must_use]
    pub fn average_distance(&self, index: usize, candidates: &CandidateSet) -> Option<f64> {
        if !candidates.is_live(index) {
            return None;
        }

        let peers = candidates.len() - 1;
        if peers == 0 {
            return Some(0.0);
        }

        let sum = candidates
            .live_indices()
            .filter(|&other| other != index)
            .map(|other| self.get(index, other))
            .sum::<Option<usize>>()?;

        Some(sum as f64 / peers as f64)
    }

    /// Average distance from every live candidate to its live peers
    ///
    /// Expects a preceding [`refresh`](Self::refresh). Returned in canonical
    /// order as `(arena index, average)`. A lone candidate averages 0.
    #[must_use]
    pub fn peer_averages(&self, candidates: &CandidateSet) -> Vec<(usize, f64)> {
        let mut sums = vec![0usize; candidates.total()];

        for (key, &distance) in &self.distances {
            if candidates.is_live(key.low) && candidates.is_live(key.high) {
                sums[key.low] += distance;
                sums[key.high] += distance;
            }
        }

        let peers = candidates.len().saturating_sub(1);
        candidates
            .live_indices()
            .map(|i| {
                let average = if peers == 0 {
                    0.0
                } else {
                    sums[i] as f64 / peers as f64
                };
                (i, average)
            })
            .collect()
    }
}
