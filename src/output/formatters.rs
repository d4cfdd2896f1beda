//! Formatting utilities for terminal output

use crate::core::{EditOp, EditTable, Signature, Word};
use colored::{ColoredString, Colorize};

/// Color one operation tag
#[must_use]
pub fn colored_tag(op: EditOp) -> ColoredString {
    let tag = op.tag().to_string();
    match op {
        EditOp::Replace => tag.yellow().bold(),
        EditOp::Transpose => tag.magenta().bold(),
        EditOp::Insert => tag.green().bold(),
        EditOp::Delete => tag.red().bold(),
    }
}

/// Feedback as colored tags, e.g. `[2] RI`
#[must_use]
pub fn colored_ops(signature: &Signature) -> String {
    if signature.is_solved() {
        return "✓".bright_green().bold().to_string();
    }

    let tags: String = signature
        .ops()
        .iter()
        .map(|&op| colored_tag(op).to_string())
        .collect();
    format!("[{}] {tags}", signature.distance())
}

/// A guess and its feedback on one line
#[must_use]
pub fn signature_line(word: &Word, signature: &Signature) -> String {
    format!(
        "{} {}",
        word.text().to_uppercase().bright_white().bold(),
        colored_ops(signature)
    )
}

/// Operation names spelled out, e.g. "replace, insert"
#[must_use]
pub fn ops_description(ops: &[EditOp]) -> String {
    if ops.is_empty() {
        return "identical".to_string();
    }
    ops.iter().map(|op| op.name()).collect::<Vec<_>>().join(", ")
}

/// Render the DP table with the source down the side and the target across
#[must_use]
pub fn format_table(table: &EditTable, source: &Word, target: &Word) -> String {
    let width = table
        .distance()
        .max(table.rows())
        .max(table.cols())
        .to_string()
        .len()
        + 1;

    let header: String = std::iter::once('ε')
        .chain(target.chars().iter().copied())
        .map(|c| format!("{c:>width$}"))
        .collect();
    let mut out = format!("{:>width$}{header}\n", "");

    for i in 0..table.rows() {
        let label = if i == 0 { 'ε' } else { source.char_at(i - 1) };
        out.push_str(&format!("{label:>width$}"));
        for value in table.row(i) {
            out.push_str(&format!("{value:>width$}"));
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
