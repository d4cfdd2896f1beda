//! Word solving command
//!
//! Plays one game against a known secret and returns the solution path.

use crate::core::{Signature, Word};
use crate::game::{DEFAULT_MAX_GUESSES, Game, GuessOutcome};
use crate::solver::metrics::average_distance;
use crate::solver::{GameSession, PlayerConfig};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// A single guess step in a played game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub signature: Signature,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Average distance from the guess to the other candidates it was chosen from
    pub average_distance: Option<f64>,
}

/// Full record of one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: Word,
    pub steps: Vec<GuessStep>,
    pub solved: bool,
}

impl GameRecord {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn first_guess(&self) -> Option<&Word> {
        self.steps.first().map(|step| &step.word)
    }
}

/// Play a session against a game until it is solved or lost
///
/// # Errors
///
/// Returns an error if the session cannot produce a guess (for example the
/// secret is not in the session's dictionary and feedback eliminated every
/// candidate).
pub fn play_game(session: &mut GameSession, game: &mut Game) -> Result<GameRecord> {
    let mut steps = Vec::new();

    while !game.is_over() {
        let candidates_before = session.candidates().len();
        let guess = session.next_guess()?;

        let average_distance = (candidates_before > 1).then(|| {
            let live: Vec<&Word> = session.candidates().live_words().collect();
            average_distance(&guess, &live)
        });

        let outcome = game.guess(&guess)?;
        let signature = outcome.signature();
        let candidates_after = session.report_signature(&guess, signature.clone())?;

        steps.push(GuessStep {
            word: guess,
            signature,
            candidates_before,
            candidates_after,
            average_distance,
        });

        if matches!(outcome, GuessOutcome::Solved | GuessOutcome::Lost { .. }) {
            break;
        }
    }

    tracing::debug!(
        secret = %game.secret(),
        guesses = steps.len(),
        solved = game.is_solved(),
        "game finished"
    );

    Ok(GameRecord {
        secret: game.secret().clone(),
        steps,
        solved: game.is_solved(),
    })
}

/// Solve a specific word with a fresh session over `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word
/// - The target is not in the dictionary
/// - The session fails to produce a guess
pub fn solve_word(
    config: SolveConfig,
    dictionary: &[Word],
    player: &PlayerConfig,
) -> Result<GameRecord> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    if !dictionary.contains(&target) {
        bail!("Word '{target}' not in dictionary");
    }

    let mut session = GameSession::start_game(
        dictionary.iter().cloned(),
        config.max_guesses,
        player.clone(),
    )?;
    let mut game = Game::new(target, config.max_guesses);

    play_game(&mut session, &mut game)
}
