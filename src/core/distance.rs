//! Edit distance with adjacent transposition
//!
//! Pure functions over character sequences. Empty sequences are valid input:
//! editing to or from the empty word is pure insertion or deletion.

use super::edit::{Edit, EditOp, ops_of};
use super::table::EditTable;
use super::word::Word;

/// Minimal number of insert, delete, replace and adjacent-transpose
/// operations turning `s0` into `s1`
///
/// # Examples
/// ```
/// use distle_solver::core::edit_distance;
///
/// assert_eq!(edit_distance("cat", "act"), 1);
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(s0: &str, s1: &str) -> usize {
    if s0 == s1 {
        return 0;
    }

    let a: Vec<char> = s0.chars().collect();
    let b: Vec<char> = s1.chars().collect();
    distance_only(&a, &b)
}

/// Canonical top-down operation tags turning `s0` into `s1`
///
/// # Examples
/// ```
/// use distle_solver::core::{EditOp, transformation_sequence};
///
/// assert_eq!(transformation_sequence("cat", "act"), vec![EditOp::Transpose]);
/// assert!(transformation_sequence("same", "same").is_empty());
/// ```
#[must_use]
pub fn transformation_sequence(s0: &str, s1: &str) -> Vec<EditOp> {
    ops_of(&transformation_edits(s0, s1))
}

/// Canonical top-down edit script turning `s0` into `s1`
#[must_use]
pub fn transformation_edits(s0: &str, s1: &str) -> Vec<Edit> {
    if s0 == s1 {
        return Vec::new();
    }

    let a: Vec<char> = s0.chars().collect();
    let b: Vec<char> = s1.chars().collect();
    char_edits(&a, &b)
}

/// Edit script over pre-split character slices
#[must_use]
pub fn char_edits(a: &[char], b: &[char]) -> Vec<Edit> {
    if a == b {
        return Vec::new();
    }
    EditTable::build(a, b).reconstruct(a, b)
}

/// Distance between two dictionary words
#[inline]
#[must_use]
pub fn word_distance(a: &Word, b: &Word) -> usize {
    if a == b {
        return 0;
    }
    distance_only(a.chars(), b.chars())
}

/// Distance without keeping the full table
///
/// Produces the same value as the bottom-right cell of [`EditTable`], using
/// three rolling rows (transposition looks back two rows).
#[must_use]
pub fn distance_only(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let cols = b.len() + 1;
    let mut before_prev = vec![0usize; cols];
    let mut prev: Vec<usize> = (0..cols).collect();
    let mut curr = vec![0usize; cols];

    for i in 1..=a.len() {
        curr[0] = i;

        for j in 1..cols {
            let substitution = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j - 1] + substitution)
                .min(curr[j - 1] + 1)
                .min(prev[j] + 1);

            if i >= 2 && j >= 2 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before_prev[j - 2] + 1);
            }

            curr[j] = best;
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edit::apply_edits;

    const SAMPLE: &[&str] = &[
        "", "a", "ab", "ba", "cat", "act", "cart", "kitten", "sitting", "saturday", "sunday",
        "abcd", "badc", "aabb", "abab",
    ];

    #[test]
    fn identical_words_have_zero_distance() {
        for &w in SAMPLE {
            assert_eq!(edit_distance(w, w), 0);
            assert!(transformation_sequence(w, w).is_empty());
        }
    }

    #[test]
    fn cat_act_is_one_transpose() {
        assert_eq!(edit_distance("cat", "act"), 1);
        assert_eq!(transformation_sequence("cat", "act"), vec![EditOp::Transpose]);
    }

    #[test]
    fn kitten_sitting_has_no_transpose() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        let ops = transformation_sequence("kitten", "sitting");
        assert_eq!(ops.len(), 3);
        assert!(!ops.contains(&EditOp::Transpose));
    }

    #[test]
    fn empty_to_word_is_all_inserts() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(
            transformation_sequence("", "abc"),
            vec![EditOp::Insert, EditOp::Insert, EditOp::Insert]
        );
    }

    #[test]
    fn word_to_empty_is_all_deletes() {
        assert_eq!(
            transformation_sequence("abc", ""),
            vec![EditOp::Delete, EditOp::Delete, EditOp::Delete]
        );
    }

    #[test]
    fn distance_is_symmetric() {
        for &a in SAMPLE {
            for &b in SAMPLE {
                assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn sequence_length_equals_distance() {
        for &a in SAMPLE {
            for &b in SAMPLE {
                assert_eq!(transformation_sequence(a, b).len(), edit_distance(a, b));
            }
        }
    }

    #[test]
    fn rolling_rows_match_full_table() {
        for &a in SAMPLE {
            for &b in SAMPLE {
                let ca: Vec<char> = a.chars().collect();
                let cb: Vec<char> = b.chars().collect();
                assert_eq!(
                    distance_only(&ca, &cb),
                    EditTable::build(&ca, &cb).distance(),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn applying_edits_reaches_target() {
        for &a in SAMPLE {
            for &b in SAMPLE {
                let source: Vec<char> = a.chars().collect();
                let result: String = apply_edits(&source, &transformation_edits(a, b))
                    .into_iter()
                    .collect();
                assert_eq!(result, b, "{a} -> {b}");
            }
        }
    }

    #[test]
    fn insert_and_delete_swap_roles_when_reversed() {
        assert_eq!(transformation_sequence("cart", "cat"), vec![EditOp::Delete]);
        assert_eq!(transformation_sequence("cat", "cart"), vec![EditOp::Insert]);
    }

    #[test]
    fn word_distance_matches_str_distance() {
        let a = Word::new("saturday").unwrap();
        let b = Word::new("sunday").unwrap();
        assert_eq!(word_distance(&a, &b), 3);
        assert_eq!(word_distance(&a, &a), 0);
    }
}
