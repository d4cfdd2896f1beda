//! Test all secrets - comprehensive solver evaluation
//!
//! Plays one game for every dictionary word (or a prefix of the dictionary)
//! and collects statistics.

use super::solve::play_game;
use crate::core::Word;
use crate::game::Game;
use crate::solver::{GameSession, PlayerConfig};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub max_allowed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_word: Option<(String, usize)>,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    /// Average guesses grouped by secret length
    pub by_length: Vec<(usize, f64)>,
}

/// Run the solver against every dictionary word (or the first `limit`)
///
/// # Errors
///
/// Returns an error if a session cannot be started or fails mid-game.
#[allow(clippy::too_many_lines)] // Test orchestration plus statistics
pub fn run_test_all(
    dictionary: &[Word],
    player: &PlayerConfig,
    max_guesses: usize,
    limit: Option<usize>,
) -> Result<TestAllStatistics> {
    let test_words: Vec<&Word> = dictionary
        .iter()
        .take(limit.unwrap_or(dictionary.len()))
        .collect();

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::with_capacity(test_words.len());
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();

    let total_start = Instant::now();

    for (idx, &secret) in test_words.iter().enumerate() {
        let word_start = Instant::now();

        let mut session =
            GameSession::start_game(dictionary.iter().cloned(), max_guesses, player.clone())?;
        let mut game = Game::new(secret.clone(), max_guesses);
        let record = play_game(&mut session, &mut game)?;

        let num_guesses = record.num_guesses();
        if record.solved {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }

        results.push(WordTestResult {
            word: secret.text().to_string(),
            guesses: record
                .steps
                .iter()
                .map(|step| step.word.text().to_string())
                .collect(),
            num_guesses,
            success: record.solved,
            duration: word_start.elapsed(),
        });

        if idx % 10 == 0 {
            let avg =
                results.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let best_word = solved
        .iter()
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.word.clone(), r.num_guesses));

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.word.clone(), r.num_guesses))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    let mut lengths: HashMap<usize, (usize, usize)> = HashMap::new();
    for r in &solved {
        let entry = lengths.entry(r.word.chars().count()).or_insert((0, 0));
        entry.0 += r.num_guesses;
        entry.1 += 1;
    }
    let mut by_length: Vec<(usize, f64)> = lengths
        .into_iter()
        .map(|(len, (sum, count))| (len, sum as f64 / count as f64))
        .collect();
    by_length.sort_by_key(|&(len, _)| len);

    Ok(TestAllStatistics {
        total_words: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        max_allowed: max_guesses,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        best_word,
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
        by_length,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=stats.max_allowed {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.by_length.is_empty() {
        println!("\n📏 {}", "By Word Length".bright_cyan().bold());
        for (len, avg) in &stats.by_length {
            println!("  {len:2} letters: {avg:.2} guesses");
        }
    }

    if let Some((word, guesses)) = &stats.best_word {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            word.to_uppercase().bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
