//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or use the embedded one.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are skipped, as are lines that are not a
/// valid word. Duplicates are kept; the candidate set removes them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use distle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|e| {
                    skipped += 1;
                    tracing::debug!(line, error = %e, "skipping dictionary entry");
                })
                .ok()
        })
        .collect();

    tracing::info!(
        path = %path.display(),
        words = words.len(),
        skipped,
        "loaded dictionary"
    );

    Ok(words)
}

/// Convert an embedded string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use distle_solver::wordlists::loader::words_from_slice;
/// use distle_solver::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
