//! Word analysis command
//!
//! Measures how well a word would split the dictionary as an opening guess.

use crate::core::{Signature, Word};
use crate::solver::metrics::{GuessMetrics, calculate_metrics, group_by_signature};
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Largest signature groups, biggest first
    pub largest_groups: Vec<(Signature, usize)>,
}

/// Analyze a word against a set of candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &[Word], candidates: &[Word]) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;

    if !dictionary.contains(&word) {
        bail!("Word '{word}' not in dictionary");
    }

    let candidate_refs: Vec<&Word> = candidates.iter().collect();
    let metrics = calculate_metrics(&word, &candidate_refs);

    let mut largest_groups: Vec<(Signature, usize)> =
        group_by_signature(&word, &candidate_refs).into_iter().collect();
    largest_groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    largest_groups.truncate(5);

    Ok(AnalysisResult {
        word,
        metrics,
        total_candidates: candidates.len(),
        largest_groups,
    })
}
