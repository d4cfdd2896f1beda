//! Reference game driver
//!
//! Holds the secret, counts guesses and answers each one with its feedback
//! signature. The solver never sees the secret; simulations, the CLI and
//! tests sit a [`Game`] opposite a [`GameSession`](crate::solver::GameSession).

use crate::core::{Signature, Word};
use thiserror::Error;

/// Guess limit of a standard Distle game
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Result of one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was the secret
    Solved,
    /// Wrong guess, game continues
    Miss(Signature),
    /// Wrong guess and no guesses are left
    Lost { secret: Word, signature: Signature },
}

impl GuessOutcome {
    /// Feedback to hand to the player
    #[must_use]
    pub fn signature(&self) -> Signature {
        match self {
            Self::Solved => Signature::SOLVED,
            Self::Miss(signature) | Self::Lost { signature, .. } => signature.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The game is over")]
    Over,
}

/// One game from the side holding the secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    max_guesses: usize,
    guesses: Vec<Word>,
    solved: bool,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word, max_guesses: usize) -> Self {
        Self {
            secret,
            max_guesses,
            guesses: Vec::new(),
            solved: false,
        }
    }

    /// Evaluate a guess against the secret
    ///
    /// # Errors
    /// Returns `GameError::Over` once the secret was found or the guess
    /// limit was reached.
    pub fn guess(&mut self, word: &Word) -> Result<GuessOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::Over);
        }

        self.guesses.push(word.clone());

        if *word == self.secret {
            self.solved = true;
            return Ok(GuessOutcome::Solved);
        }

        let signature = Signature::calculate(word, &self.secret);
        if self.guesses.len() >= self.max_guesses {
            Ok(GuessOutcome::Lost {
                secret: self.secret.clone(),
                signature,
            })
        } else {
            Ok(GuessOutcome::Miss(signature))
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.solved || self.guesses.len() >= self.max_guesses
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditOp;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn correct_guess_solves() {
        let mut game = Game::new(word("cat"), 3);
        assert_eq!(game.guess(&word("cat")), Ok(GuessOutcome::Solved));
        assert!(game.is_solved());
        assert_eq!(game.guess(&word("bat")), Err(GameError::Over));
    }

    #[test]
    fn miss_carries_signature() {
        let mut game = Game::new(word("cat"), 3);
        let outcome = game.guess(&word("act")).unwrap();
        assert_eq!(outcome.signature().ops(), &[EditOp::Transpose]);
        assert!(matches!(outcome, GuessOutcome::Miss(_)));
    }

    #[test]
    fn last_miss_loses() {
        let mut game = Game::new(word("cat"), 2);
        game.guess(&word("bat")).unwrap();
        let outcome = game.guess(&word("hat")).unwrap();
        assert!(matches!(outcome, GuessOutcome::Lost { ref secret, .. } if secret.text() == "cat"));
        assert!(game.is_over());
        assert!(!game.is_solved());
        assert_eq!(game.guesses().len(), 2);
    }

    #[test]
    fn solved_outcome_has_solved_signature() {
        assert!(GuessOutcome::Solved.signature().is_solved());
    }
}
