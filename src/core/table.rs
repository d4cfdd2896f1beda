//! Edit distance memoization table and canonical reconstruction
//!
//! Cell (i, j) holds the minimal number of operations turning the first `i`
//! characters of the source into the first `j` characters of the target.
//!
//! # Recurrence
//! ```text
//! T(i, 0) = i                      T(0, j) = j
//! T(i, j) = min( T(i-1, j-1) + [s0[i-1] != s1[j-1]]   match / replace
//!              , T(i-2, j-2) + 1  if swapped pair    transpose
//!              , T(i,   j-1) + 1                     insert
//!              , T(i-1, j  ) + 1 )                   delete
//! ```

use super::edit::Edit;

/// Completed memoization table for one (source, target) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

/// One reconstruction rule
///
/// Rules are tried in [`RECONSTRUCTION_ORDER`]; the first whose preconditions
/// hold at the current cell decides the step. That order is what makes the
/// reported sequence canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Equal characters, value carried over from the diagonal
    Match,
    Replace,
    Transpose,
    Insert,
    Delete,
}

/// Canonical tie-break: Replace > Transpose > Insert > Delete
pub const RECONSTRUCTION_ORDER: [Step; 5] = [
    Step::Match,
    Step::Replace,
    Step::Transpose,
    Step::Insert,
    Step::Delete,
];

/// Outcome of a rule firing at a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub edit: Option<Edit>,
}

/// True when the last two characters of both prefixes are swapped copies
#[inline]
fn is_swapped(s0: &[char], s1: &[char], i: usize, j: usize) -> bool {
    i >= 2 && j >= 2 && s0[i - 1] == s1[j - 2] && s0[i - 2] == s1[j - 1]
}

impl Step {
    /// Try this rule at cell (i, j)
    ///
    /// Returns the predecessor cell and the emitted edit (if any), or `None`
    /// when a precondition fails.
    #[must_use]
    pub fn try_at(
        self,
        table: &EditTable,
        s0: &[char],
        s1: &[char],
        i: usize,
        j: usize,
    ) -> Option<Move> {
        let here = table.get(i, j);

        match self {
            Self::Match => (i > 0
                && j > 0
                && s0[i - 1] == s1[j - 1]
                && here == table.get(i - 1, j - 1))
                .then(|| Move {
                    row: i - 1,
                    col: j - 1,
                    edit: None,
                }),
            Self::Replace => (i > 0
                && j > 0
                && s0[i - 1] != s1[j - 1]
                && here == table.get(i - 1, j - 1) + 1)
                .then(|| Move {
                    row: i - 1,
                    col: j - 1,
                    edit: Some(Edit::Replace {
                        at: i - 1,
                        with: s1[j - 1],
                    }),
                }),
            Self::Transpose => (is_swapped(s0, s1, i, j) && here == table.get(i - 2, j - 2) + 1)
                .then(|| Move {
                    row: i - 2,
                    col: j - 2,
                    edit: Some(Edit::Transpose { at: i - 2 }),
                }),
            Self::Insert => (j > 0 && here == table.get(i, j - 1) + 1).then(|| Move {
                row: i,
                col: j - 1,
                edit: Some(Edit::Insert {
                    at: i,
                    ch: s1[j - 1],
                }),
            }),
            Self::Delete => (i > 0 && here == table.get(i - 1, j) + 1).then(|| Move {
                row: i - 1,
                col: j,
                edit: Some(Edit::Delete { at: i - 1 }),
            }),
        }
    }
}

impl EditTable {
    /// Fill the table for `s0 -> s1`
    ///
    /// # Examples
    /// ```
    /// use distle_solver::core::EditTable;
    ///
    /// let s0: Vec<char> = "cat".chars().collect();
    /// let s1: Vec<char> = "act".chars().collect();
    /// let table = EditTable::build(&s0, &s1);
    /// assert_eq!(table.distance(), 1);
    /// assert_eq!(table.get(3, 0), 3);
    /// ```
    #[must_use]
    pub fn build(s0: &[char], s1: &[char]) -> Self {
        let rows = s0.len() + 1;
        let cols = s1.len() + 1;
        let mut table = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 0..rows {
            table.set(i, 0, i);
        }
        for j in 0..cols {
            table.set(0, j, j);
        }

        for i in 1..rows {
            for j in 1..cols {
                let substitution = usize::from(s0[i - 1] != s1[j - 1]);
                let mut best = table.get(i - 1, j - 1) + substitution;

                if is_swapped(s0, s1, i, j) {
                    best = best.min(table.get(i - 2, j - 2) + 1);
                }

                best = best
                    .min(table.get(i, j - 1) + 1)
                    .min(table.get(i - 1, j) + 1);

                table.set(i, j, best);
            }
        }

        table
    }

    /// Number of rows (`|s0| + 1`)
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`|s1| + 1`)
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Value of cell (i, j)
    ///
    /// # Panics
    /// Panics if the cell is outside the table.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// Edit distance of the full words (bottom-right cell)
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// One row of the table
    #[must_use]
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Walk from the full-length cell back to (0, 0), collecting edits
    ///
    /// `s0` and `s1` must be the words this table was built from.
    ///
    /// # Panics
    /// Panics if the words do not match the table dimensions.
    #[must_use]
    pub fn reconstruct(&self, s0: &[char], s1: &[char]) -> Vec<Edit> {
        assert_eq!(
            (s0.len() + 1, s1.len() + 1),
            (self.rows, self.cols),
            "words do not match table dimensions"
        );

        let mut edits = Vec::with_capacity(self.distance());
        let (mut i, mut j) = (self.rows - 1, self.cols - 1);

        while i > 0 || j > 0 {
            let step = RECONSTRUCTION_ORDER
                .iter()
                .find_map(|rule| rule.try_at(self, s0, s1, i, j))
                .expect("every cell derives from one of its predecessors");

            edits.extend(step.edit);
            i = step.row;
            j = step.col;
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edit::{EditOp, ops_of};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn table(a: &str, b: &str) -> EditTable {
        EditTable::build(&chars(a), &chars(b))
    }

    #[test]
    fn base_cases() {
        let t = table("abc", "de");
        assert_eq!((t.rows(), t.cols()), (4, 3));
        for i in 0..4 {
            assert_eq!(t.get(i, 0), i);
        }
        for j in 0..3 {
            assert_eq!(t.get(0, j), j);
        }
    }

    #[test]
    fn kitten_sitting_table() {
        let t = table("kitten", "sitting");
        assert_eq!(t.distance(), 3);
        assert_eq!(t.row(1), &[1, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn transposition_is_one_operation() {
        assert_eq!(table("cat", "act").distance(), 1);
        assert_eq!(table("ab", "ba").distance(), 1);
    }

    #[test]
    fn empty_tables() {
        let t = table("", "");
        assert_eq!(t.distance(), 0);
        assert!(t.reconstruct(&[], &[]).is_empty());
        assert_eq!(table("", "abc").distance(), 3);
        assert_eq!(table("abc", "").distance(), 3);
    }

    #[test]
    fn reconstruct_single_transpose() {
        let t = table("ab", "ba");
        assert_eq!(
            ops_of(&t.reconstruct(&chars("ab"), &chars("ba"))),
            [EditOp::Transpose]
        );
    }

    #[test]
    fn reconstruct_prefers_replace_over_insert_on_ties() {
        // "ab" -> "bc": two replaces or insert 'c' + delete 'a', both cost 2
        let s0 = chars("ab");
        let s1 = chars("bc");
        let t = EditTable::build(&s0, &s1);
        assert_eq!(t.distance(), 2);
        assert_eq!(
            t.reconstruct(&s0, &s1),
            vec![
                Edit::Replace { at: 1, with: 'c' },
                Edit::Replace { at: 0, with: 'b' },
            ]
        );
    }

    #[test]
    fn reconstruct_insert_then_delete() {
        let s0 = chars("abc");
        let s1 = chars("bcd");
        let t = EditTable::build(&s0, &s1);
        assert_eq!(t.distance(), 2);
        assert_eq!(
            t.reconstruct(&s0, &s1),
            vec![Edit::Insert { at: 3, ch: 'd' }, Edit::Delete { at: 0 }]
        );
    }

    #[test]
    fn match_rule_requires_equal_characters() {
        let s0 = chars("a");
        let s1 = chars("b");
        let t = EditTable::build(&s0, &s1);
        assert_eq!(Step::Match.try_at(&t, &s0, &s1, 1, 1), None);
        assert!(Step::Replace.try_at(&t, &s0, &s1, 1, 1).is_some());
    }

    #[test]
    fn transpose_rule_needs_two_characters() {
        let s0 = chars("a");
        let s1 = chars("a");
        let t = EditTable::build(&s0, &s1);
        assert_eq!(Step::Transpose.try_at(&t, &s0, &s1, 1, 1), None);
    }

    #[test]
    fn reconstruction_order_is_fixed() {
        assert_eq!(
            RECONSTRUCTION_ORDER,
            [
                Step::Match,
                Step::Replace,
                Step::Transpose,
                Step::Insert,
                Step::Delete
            ]
        );
    }

    #[test]
    fn reconstruct_walks_top_down() {
        // "cart" -> "cat": the single delete is at the end of the walk's start
        let s0 = chars("cart");
        let s1 = chars("cat");
        let t = EditTable::build(&s0, &s1);
        assert_eq!(t.reconstruct(&s0, &s1), vec![Edit::Delete { at: 2 }]);
    }
}
