//! Distle feedback signatures
//!
//! The feedback for a guess is the edit distance to the secret together with
//! the canonical top-down operation sequence. Two candidates are
//! indistinguishable after a guess exactly when they share a signature.

use super::distance::char_edits;
use super::edit::{EditOp, ops_of};
use super::word::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for one guess: distance plus canonical operation tags
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
    distance: usize,
    ops: Vec<EditOp>,
}

/// Error type for malformed or inconsistent feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Feedback is empty")]
    Empty,
    #[error("Invalid operation tag {0:?} (expected R, T, I or D)")]
    InvalidTag(char),
    #[error("Invalid distance {0:?}")]
    InvalidDistance(String),
    #[error("Distance {distance} does not match {ops} reported operations")]
    Mismatch { distance: usize, ops: usize },
}

impl Signature {
    /// The signature of a correct guess
    pub const SOLVED: Self = Self {
        distance: 0,
        ops: Vec::new(),
    };

    /// Build a signature from reported values
    ///
    /// Every operation, transposition included, counts once toward the
    /// distance, so the two must agree.
    ///
    /// # Errors
    /// Returns `SignatureError::Mismatch` if `distance != ops.len()`.
    pub fn new(distance: usize, ops: Vec<EditOp>) -> Result<Self, SignatureError> {
        if distance != ops.len() {
            return Err(SignatureError::Mismatch {
                distance,
                ops: ops.len(),
            });
        }
        Ok(Self { distance, ops })
    }

    /// Calculate the signature when `guess` is guessed and `answer` is the secret
    ///
    /// # Examples
    /// ```
    /// use distle_solver::core::{EditOp, Signature, Word};
    ///
    /// let guess = Word::new("cat").unwrap();
    /// let answer = Word::new("act").unwrap();
    /// let signature = Signature::calculate(&guess, &answer);
    ///
    /// assert_eq!(signature.distance(), 1);
    /// assert_eq!(signature.ops(), &[EditOp::Transpose]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let ops = ops_of(&char_edits(guess.chars(), answer.chars()));
        Self {
            distance: ops.len(),
            ops,
        }
    }

    /// Reported edit distance
    #[inline]
    #[must_use]
    pub const fn distance(&self) -> usize {
        self.distance
    }

    /// Reported operation tags, top-down
    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Check if this is the feedback of a correct guess
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.distance == 0
    }

    /// Tags as a compact string, e.g. "RRI"
    #[must_use]
    pub fn tags(&self) -> String {
        self.ops.iter().map(|op| op.tag()).collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            write!(f, "{}", self.distance)
        } else {
            write!(f, "{} {}", self.distance, self.tags())
        }
    }
}

impl std::str::FromStr for Signature {
    type Err = SignatureError;

    /// Parse feedback such as `"3 RRI"`, `"RRI"`, `"[R, T]"` or `"0"`
    ///
    /// A leading number is the distance; without one the distance is the
    /// number of tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SignatureError::Empty);
        }

        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (number, rest) = trimmed.split_at(digits_end);

        let ops = rest
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']' | '"' | '\''))
            .map(|c| EditOp::from_tag(c).ok_or(SignatureError::InvalidTag(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let distance = if number.is_empty() {
            ops.len()
        } else {
            number
                .parse()
                .map_err(|_| SignatureError::InvalidDistance(number.to_string()))?
        };

        Self::new(distance, ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn solved_constant() {
        assert!(Signature::SOLVED.is_solved());
        assert!(Signature::SOLVED.ops().is_empty());
        assert_eq!(Signature::calculate(&word("cat"), &word("cat")), Signature::SOLVED);
    }

    #[test]
    fn calculate_transpose() {
        let sig = Signature::calculate(&word("cat"), &word("act"));
        assert_eq!(sig.distance(), 1);
        assert_eq!(sig.tags(), "T");
    }

    #[test]
    fn calculate_is_not_symmetric_in_tags() {
        let forward = Signature::calculate(&word("cart"), &word("cat"));
        let backward = Signature::calculate(&word("cat"), &word("cart"));
        assert_eq!(forward.distance(), backward.distance());
        assert_eq!(forward.tags(), "D");
        assert_eq!(backward.tags(), "I");
    }

    #[test]
    fn new_rejects_mismatch() {
        assert_eq!(
            Signature::new(2, vec![EditOp::Replace]),
            Err(SignatureError::Mismatch { distance: 2, ops: 1 })
        );
        assert!(Signature::new(1, vec![EditOp::Transpose]).is_ok());
    }

    #[test]
    fn parse_with_distance() {
        let sig: Signature = "3 RRI".parse().unwrap();
        assert_eq!(sig.distance(), 3);
        assert_eq!(
            sig.ops(),
            &[EditOp::Replace, EditOp::Replace, EditOp::Insert]
        );
    }

    #[test]
    fn parse_without_distance() {
        let sig: Signature = "td".parse().unwrap();
        assert_eq!(sig.distance(), 2);
        assert_eq!(sig.ops(), &[EditOp::Transpose, EditOp::Delete]);
    }

    #[test]
    fn parse_list_syntax() {
        let sig: Signature = "[\"R\", \"T\"]".parse().unwrap();
        assert_eq!(sig.tags(), "RT");
    }

    #[test]
    fn parse_solved() {
        let sig: Signature = "0".parse().unwrap();
        assert!(sig.is_solved());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Signature>(), Err(SignatureError::Empty));
        assert_eq!("2 RX".parse::<Signature>(), Err(SignatureError::InvalidTag('X')));
        assert_eq!(
            "3 RR".parse::<Signature>(),
            Err(SignatureError::Mismatch { distance: 3, ops: 2 })
        );
    }

    #[test]
    fn display_round_trips() {
        let sig = Signature::calculate(&word("kitten"), &word("sitting"));
        let parsed: Signature = sig.to_string().parse().unwrap();
        assert_eq!(parsed, sig);
        assert_eq!(Signature::SOLVED.to_string(), "0");
    }
}
