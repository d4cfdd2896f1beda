//! One game of Distle from the player's side
//!
//! The session owns the candidate set and the pair distance cache. It issues
//! one guess at a time and must receive the feedback for that guess before
//! it will issue another.

use super::candidates::CandidateSet;
use super::pairs::PairDistances;
use super::strategy::{ScoredGuess, Strategy, StrategyType};
use crate::core::{EditOp, Signature, SignatureError, Word};
use thiserror::Error;

/// Player configuration
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Ranking used once feedback is available
    pub strategy: StrategyType,
    /// Opening guess; ignored if it is not in the dictionary
    pub opening: Option<Word>,
}

/// Where the session is in its guess/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No feedback yet; the next guess is the fixed opening move
    Opening,
    /// A guess is outstanding; its feedback will filter the candidates
    Filtering,
    /// Feedback consumed; the next guess comes from the strategy
    Directed,
    /// The secret was guessed
    Solved,
}

/// One consumed feedback round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub signature: Signature,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Errors surfaced to the game driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Dictionary must contain at least one word")]
    EmptyDictionary,
    #[error("A game must allow at least one guess")]
    NoGuessesAllowed,
    #[error("Inconsistent feedback: {0}")]
    InconsistentFeedback(#[from] SignatureError),
    #[error(
        "No candidates remain after feedback for '{0}': the feedback is inconsistent or the secret is not in the dictionary"
    )]
    CandidateExhaustion(Word),
    #[error("Still waiting for feedback on '{0}'")]
    AwaitingFeedback(Word),
    #[error("Feedback is for '{got}' but the outstanding guess is '{expected}'")]
    UnexpectedGuess { expected: Word, got: Word },
    #[error("'{0}' has already been guessed this game")]
    RepeatedGuess(Word),
    #[error("The secret has already been guessed")]
    AlreadySolved,
    #[error("All {0} guesses have been used")]
    OutOfGuesses(usize),
}

/// Per-game player state
#[derive(Debug, Clone)]
pub struct GameSession {
    strategy: StrategyType,
    opening: Option<Word>,
    max_guesses: usize,
    candidates: CandidateSet,
    pairs: PairDistances,
    history: Vec<Word>,
    rounds: Vec<Round>,
    pending: Option<Word>,
    solved: bool,
    dictionary_lengths: (usize, usize),
}

impl GameSession {
    /// Start a fresh game over `dictionary`
    ///
    /// Word lengths are recorded for display only; they never restrict
    /// filtering.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyDictionary` for an empty dictionary and
    /// `SessionError::NoGuessesAllowed` if `max_guesses` is zero.
    ///
    /// # Examples
    /// ```
    /// use distle_solver::core::{Signature, Word};
    /// use distle_solver::solver::{GameSession, PlayerConfig};
    ///
    /// let dictionary = ["cat", "act", "bat", "cart"].map(|w| Word::new(w).unwrap());
    /// let mut session = GameSession::start_game(dictionary, 10, PlayerConfig::default()).unwrap();
    ///
    /// let guess = session.next_guess().unwrap();
    /// assert_eq!(guess.text(), "act"); // first word in canonical order
    ///
    /// let secret = Word::new("cat").unwrap();
    /// let feedback = Signature::calculate(&guess, &secret);
    /// session
    ///     .report_feedback(&guess, feedback.distance(), feedback.ops().to_vec())
    ///     .unwrap();
    /// assert_eq!(session.next_guess().unwrap(), secret);
    /// ```
    pub fn start_game(
        dictionary: impl IntoIterator<Item = Word>,
        max_guesses: usize,
        config: PlayerConfig,
    ) -> Result<Self, SessionError> {
        if max_guesses == 0 {
            return Err(SessionError::NoGuessesAllowed);
        }

        let candidates = CandidateSet::new(dictionary);
        let dictionary_lengths = candidates
            .length_range()
            .ok_or(SessionError::EmptyDictionary)?;

        tracing::debug!(
            words = candidates.len(),
            min_len = dictionary_lengths.0,
            max_len = dictionary_lengths.1,
            max_guesses,
            strategy = %config.strategy,
            "started game"
        );

        Ok(Self {
            strategy: config.strategy,
            opening: config.opening,
            max_guesses,
            candidates,
            pairs: PairDistances::new(),
            history: Vec::new(),
            rounds: Vec::new(),
            pending: None,
            solved: false,
            dictionary_lengths,
        })
    }

    /// Current phase of the guess/feedback cycle
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.solved {
            Phase::Solved
        } else if self.pending.is_some() {
            Phase::Filtering
        } else if self.rounds.is_empty() {
            Phase::Opening
        } else {
            Phase::Directed
        }
    }

    /// Issue the next guess
    ///
    /// # Errors
    /// - `AwaitingFeedback` if the previous guess has no feedback yet
    /// - `AlreadySolved` after a distance-0 feedback
    /// - `OutOfGuesses` once `max_guesses` guesses were issued
    /// - `CandidateExhaustion` if no consistent, unguessed word remains
    pub fn next_guess(&mut self) -> Result<Word, SessionError> {
        match self.phase() {
            Phase::Solved => return Err(SessionError::AlreadySolved),
            Phase::Filtering => {
                if let Some(pending) = &self.pending {
                    return Err(SessionError::AwaitingFeedback(pending.clone()));
                }
            }
            Phase::Opening | Phase::Directed => {}
        }

        if self.history.len() >= self.max_guesses {
            return Err(SessionError::OutOfGuesses(self.max_guesses));
        }

        let guess = match self.phase() {
            Phase::Opening => self.opening_guess(),
            _ => self.directed_guess(),
        }
        .ok_or_else(|| self.exhausted())?;

        debug_assert!(
            !self.history.contains(&guess),
            "guess '{guess}' repeats an earlier guess"
        );

        tracing::debug!(
            guess = %guess,
            turn = self.history.len() + 1,
            candidates = self.candidates.len(),
            "issued guess"
        );

        self.history.push(guess.clone());
        self.pending = Some(guess.clone());
        Ok(guess)
    }

    /// Consume one round of feedback
    ///
    /// Returns the number of candidates left. `guess` must be the outstanding
    /// guess; when none is outstanding (a guess chosen outside the session),
    /// it must not have been guessed before.
    ///
    /// # Errors
    /// - `InconsistentFeedback` if `distance` disagrees with `ops`
    /// - `UnexpectedGuess` / `RepeatedGuess` for a guess that does not fit the history
    /// - `CandidateExhaustion` if the feedback rules out every candidate
    pub fn report_feedback(
        &mut self,
        guess: &Word,
        distance: usize,
        ops: Vec<EditOp>,
    ) -> Result<usize, SessionError> {
        let signature = Signature::new(distance, ops)?;
        self.report_signature(guess, signature)
    }

    /// Same as [`report_feedback`](Self::report_feedback) with a parsed signature
    ///
    /// # Errors
    /// See [`report_feedback`](Self::report_feedback).
    pub fn report_signature(
        &mut self,
        guess: &Word,
        signature: Signature,
    ) -> Result<usize, SessionError> {
        if self.solved {
            return Err(SessionError::AlreadySolved);
        }

        match self.pending.take() {
            Some(expected) if expected != *guess => {
                let got = guess.clone();
                self.pending = Some(expected.clone());
                return Err(SessionError::UnexpectedGuess { expected, got });
            }
            Some(_) => {}
            None => {
                if self.history.contains(guess) {
                    return Err(SessionError::RepeatedGuess(guess.clone()));
                }
                if self.history.len() >= self.max_guesses {
                    return Err(SessionError::OutOfGuesses(self.max_guesses));
                }
                self.history.push(guess.clone());
            }
        }

        let before = self.candidates.len();
        let removed = self.candidates.retain_consistent(guess, &signature);
        let after = self.candidates.len();

        self.pairs.prune(&self.candidates);

        tracing::debug!(
            guess = %guess,
            feedback = %signature,
            before,
            removed,
            after,
            "filtered candidates"
        );

        self.solved = signature.is_solved();
        self.rounds.push(Round {
            guess: guess.clone(),
            signature,
            candidates_before: before,
            candidates_after: after,
        });

        if after == 0 && !self.solved {
            tracing::warn!(guess = %guess, "feedback eliminated every candidate");
            return Err(SessionError::CandidateExhaustion(guess.clone()));
        }

        Ok(after)
    }

    /// Live candidates ranked by the configured strategy, best first
    ///
    /// Excludes words already guessed. Refreshes the pair cache if the
    /// strategy uses it.
    pub fn ranked_candidates(&mut self) -> Vec<ScoredGuess<'_>> {
        if self.strategy.needs_pairs() {
            self.pairs.refresh(&self.candidates);
        }
        let ranked = self
            .strategy
            .rank(&self.candidates, &self.pairs, &self.history);

        for scored in ranked.iter().take(5) {
            tracing::trace!(word = %scored.word, score = scored.score, "ranked");
        }

        ranked
    }

    fn opening_guess(&self) -> Option<Word> {
        self.opening
            .as_ref()
            .filter(|word| self.candidates.contains(word) && !self.history.contains(word))
            .or_else(|| {
                self.candidates
                    .live_words()
                    .find(|word| !self.history.contains(word))
            })
            .cloned()
    }

    fn directed_guess(&mut self) -> Option<Word> {
        let (first, more) = {
            let mut unguessed = self
                .candidates
                .live_words()
                .filter(|word| !self.history.contains(word));
            (unguessed.next().cloned(), unguessed.next().is_some())
        };

        match (first, more) {
            (None, _) => None,
            (Some(only), false) => Some(only),
            (Some(_), true) => self
                .ranked_candidates()
                .first()
                .map(|scored| scored.word.clone()),
        }
    }

    fn exhausted(&self) -> SessionError {
        self.rounds
            .last()
            .map_or(SessionError::EmptyDictionary, |round| {
                SessionError::CandidateExhaustion(round.guess.clone())
            })
    }

    /// The live candidate set
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Every guess made this game, in order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Every consumed feedback round, in order
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Guess waiting for feedback, if any
    #[must_use]
    pub const fn pending(&self) -> Option<&Word> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyType {
        &self.strategy
    }

    /// Shortest and longest candidate (falls back to the dictionary's range)
    #[must_use]
    pub fn word_length_range(&self) -> (usize, usize) {
        self.candidates
            .length_range()
            .unwrap_or(self.dictionary_lengths)
    }
}
