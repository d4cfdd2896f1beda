//! Benchmark command
//!
//! Plays a seeded random sample of secrets and reports solver performance.

use super::solve::{GameRecord, play_game};
use crate::core::Word;
use crate::game::Game;
use crate::solver::{GameSession, PlayerConfig};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` secrets from the dictionary with a seeded shuffle
///
/// The same seed always yields the same sample.
#[must_use]
pub fn sample_targets(dictionary: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut targets = dictionary.to_vec();
    targets.sort();
    targets.dedup();
    targets.shuffle(&mut StdRng::seed_from_u64(seed));
    targets.truncate(count);
    targets
}

/// Run benchmark on a set of target words
///
/// Games are independent and run in parallel.
///
/// # Errors
///
/// Returns an error if a session cannot be started over `dictionary` or
/// fails mid-game.
pub fn run_benchmark(
    dictionary: &[Word],
    targets: &[Word],
    player: &PlayerConfig,
    max_guesses: usize,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let records: Vec<GameRecord> = targets
        .par_iter()
        .map(|target| {
            let mut session =
                GameSession::start_game(dictionary.iter().cloned(), max_guesses, player.clone())?;
            let mut game = Game::new(target.clone(), max_guesses);
            play_game(&mut session, &mut game)
        })
        .collect::<Result<_>>()?;

    let duration = start.elapsed();

    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for record in &records {
        if record.solved {
            let guesses = record.num_guesses();
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(record.secret.clone());
        }
    }

    let total_words = records.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let dictionary = words_from_slice(&DICTIONARY[..100]);
        let targets = sample_targets(&dictionary, 10, 7);

        let result = run_benchmark(&dictionary, &targets, &PlayerConfig::default(), 100).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = words_from_slice(&DICTIONARY[..100]);
        let targets = sample_targets(&dictionary, 10, 1);

        let result = run_benchmark(&dictionary, &targets, &PlayerConfig::default(), 10).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
    }

    #[test]
    fn sample_is_seeded() {
        let dictionary = words_from_slice(&DICTIONARY[..100]);
        assert_eq!(
            sample_targets(&dictionary, 5, 99),
            sample_targets(&dictionary, 5, 99)
        );
        assert_eq!(sample_targets(&dictionary, 500, 1).len(), 100);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dictionary = words_from_slice(&DICTIONARY[..10]);
        let result = run_benchmark(&dictionary, &[], &PlayerConfig::default(), 10).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let dictionary = words_from_slice(&DICTIONARY[..100]);
        let targets = sample_targets(&dictionary, 10, 5);

        let result = run_benchmark(&dictionary, &targets, &PlayerConfig::default(), 10).unwrap();

        if result.solved > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
        for &guess_count in result.distribution.keys() {
            assert!((1..=10).contains(&guess_count));
        }
    }
}
