//! Distance command
//!
//! Shows the edit distance between two words and the canonical script that
//! turns the first into the second.

use crate::core::{Edit, EditOp, EditTable, Word, ops_of};
use anyhow::{Context, Result};

/// Everything the distance engine knows about one pair of words
pub struct DistanceReport {
    pub source: Word,
    pub target: Word,
    pub distance: usize,
    pub ops: Vec<EditOp>,
    pub edits: Vec<Edit>,
    pub table: Option<EditTable>,
}

/// Compare two words
///
/// # Errors
///
/// Returns an error if either argument is not a valid word.
pub fn compare_words(source: &str, target: &str, with_table: bool) -> Result<DistanceReport> {
    let source = Word::new(source).with_context(|| format!("Invalid word '{source}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid word '{target}'"))?;

    let table = EditTable::build(source.chars(), target.chars());
    let edits = table.reconstruct(source.chars(), target.chars());

    Ok(DistanceReport {
        distance: table.distance(),
        ops: ops_of(&edits),
        edits,
        table: with_table.then_some(table),
        source,
        target,
    })
}
