//! Edit operations
//!
//! `EditOp` is the tag reported to the player as feedback. `Edit` is the
//! positional form produced by reconstruction: it remembers where the
//! operation happens and which characters it involves, so a script can be
//! replayed against the source word.

use std::fmt;

/// One of the four atomic character operations
///
/// The declaration order is also the tie-break priority used when more than
/// one operation reaches the minimal cost (Replace first, Delete last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditOp {
    Replace,
    Transpose,
    Insert,
    Delete,
}

impl EditOp {
    /// All operations in tie-break priority order
    pub const ALL: [Self; 4] = [Self::Replace, Self::Transpose, Self::Insert, Self::Delete];

    /// Single-letter tag ("R", "T", "I", "D")
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Replace => 'R',
            Self::Transpose => 'T',
            Self::Insert => 'I',
            Self::Delete => 'D',
        }
    }

    /// Parse a tag letter, case-insensitive
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'R' => Some(Self::Replace),
            'T' => Some(Self::Transpose),
            'I' => Some(Self::Insert),
            'D' => Some(Self::Delete),
            _ => None,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Transpose => "transpose",
            Self::Insert => "insert",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A positioned edit against the source word
///
/// Positions are indices into the source word as it stands when the edit is
/// applied. Scripts are ordered from the end of the words toward the start,
/// so applying them in order never shifts a position that a later edit uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Overwrite the character at `at` with `with`
    Replace { at: usize, with: char },
    /// Swap the characters at `at` and `at + 1`
    Transpose { at: usize },
    /// Insert `ch` before position `at` (`at == len` appends)
    Insert { at: usize, ch: char },
    /// Remove the character at `at`
    Delete { at: usize },
}

impl Edit {
    /// The operation tag of this edit
    #[must_use]
    pub const fn op(self) -> EditOp {
        match self {
            Self::Replace { .. } => EditOp::Replace,
            Self::Transpose { .. } => EditOp::Transpose,
            Self::Insert { .. } => EditOp::Insert,
            Self::Delete { .. } => EditOp::Delete,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Replace { at, with } => write!(f, "R@{at}={with}"),
            Self::Transpose { at } => write!(f, "T@{at}"),
            Self::Insert { at, ch } => write!(f, "I@{at}+{ch}"),
            Self::Delete { at } => write!(f, "D@{at}"),
        }
    }
}

/// Apply an edit script to `source`, in the literal order given
///
/// # Panics
/// Panics if an edit addresses a position outside the word, which cannot
/// happen for scripts produced by reconstruction against the same source.
///
/// # Examples
/// ```
/// use distle_solver::core::{apply_edits, transformation_edits};
///
/// let source: Vec<char> = "kitten".chars().collect();
/// let edits = transformation_edits("kitten", "sitting");
/// let result: String = apply_edits(&source, &edits).into_iter().collect();
/// assert_eq!(result, "sitting");
/// ```
#[must_use]
pub fn apply_edits(source: &[char], edits: &[Edit]) -> Vec<char> {
    let mut word = source.to_vec();

    for edit in edits {
        match *edit {
            Edit::Replace { at, with } => word[at] = with,
            Edit::Transpose { at } => word.swap(at, at + 1),
            Edit::Insert { at, ch } => word.insert(at, ch),
            Edit::Delete { at } => {
                word.remove(at);
            }
        }
    }

    word
}

/// Strip positions from a script, keeping only the tags
#[must_use]
pub fn ops_of(edits: &[Edit]) -> Vec<EditOp> {
    edits.iter().map(|e| e.op()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn tags_round_trip_through_from_tag() {
        for op in EditOp::ALL {
            assert_eq!(EditOp::from_tag(op.tag()), Some(op));
            assert_eq!(EditOp::from_tag(op.tag().to_ascii_lowercase()), Some(op));
        }
        assert_eq!(EditOp::from_tag('x'), None);
    }

    #[test]
    fn priority_order_matches_declaration() {
        assert!(EditOp::Replace < EditOp::Transpose);
        assert!(EditOp::Transpose < EditOp::Insert);
        assert!(EditOp::Insert < EditOp::Delete);
    }

    #[test]
    fn apply_replace() {
        let out = apply_edits(&chars("cat"), &[Edit::Replace { at: 0, with: 'b' }]);
        assert_eq!(out, chars("bat"));
    }

    #[test]
    fn apply_transpose() {
        let out = apply_edits(&chars("cat"), &[Edit::Transpose { at: 0 }]);
        assert_eq!(out, chars("act"));
    }

    #[test]
    fn apply_insert_and_append() {
        let out = apply_edits(
            &chars("at"),
            &[Edit::Insert { at: 2, ch: 's' }, Edit::Insert { at: 0, ch: 'c' }],
        );
        assert_eq!(out, chars("cats"));
    }

    #[test]
    fn apply_delete() {
        let out = apply_edits(&chars("cart"), &[Edit::Delete { at: 2 }]);
        assert_eq!(out, chars("cat"));
    }

    #[test]
    fn apply_empty_script_is_identity() {
        assert_eq!(apply_edits(&chars("cat"), &[]), chars("cat"));
    }

    #[test]
    fn ops_of_keeps_order() {
        let edits = [
            Edit::Delete { at: 3 },
            Edit::Transpose { at: 1 },
            Edit::Insert { at: 0, ch: 'x' },
        ];
        assert_eq!(
            ops_of(&edits),
            vec![EditOp::Delete, EditOp::Transpose, EditOp::Insert]
        );
    }

    #[test]
    fn edit_display() {
        assert_eq!(Edit::Replace { at: 1, with: 'z' }.to_string(), "R@1=z");
        assert_eq!(Edit::Delete { at: 0 }.to_string(), "D@0");
        assert_eq!(EditOp::Transpose.to_string(), "T");
    }
}
