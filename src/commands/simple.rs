//! Simple interactive CLI mode
//!
//! Text-based solver without TUI: the user holds the secret and types the
//! feedback for every suggested guess.

use crate::core::{Signature, Word};
use crate::output::formatters::{colored_ops, signature_line};
use crate::solver::metrics::calculate_metrics;
use crate::solver::{GameSession, PlayerConfig, SessionError};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What the user typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackCommand {
    Quit,
    NewGame,
    Undo,
    Feedback(Signature),
}

/// Parse one line of feedback input
///
/// Accepts commands (`quit`, `new`, `undo`), `win` for a correct guess, or a
/// signature such as `2 RI`, `RI`, `r,i` or `0`.
///
/// # Errors
///
/// Returns the parse error text for anything else.
pub fn parse_feedback(input: &str) -> Result<FeedbackCommand, String> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(FeedbackCommand::Quit),
        "new" | "n" => Ok(FeedbackCommand::NewGame),
        "undo" | "u" => Ok(FeedbackCommand::Undo),
        "win" | "correct" | "yes" | "solved" => Ok(FeedbackCommand::Feedback(Signature::SOLVED)),
        other => other
            .parse::<Signature>()
            .map(FeedbackCommand::Feedback)
            .map_err(|e| e.to_string()),
    }
}

/// Rebuild a session from scratch and replay recorded feedback
///
/// Candidate removal is permanent, so undo replays every round but the last.
///
/// # Errors
///
/// Returns the session error if a recorded round no longer applies.
pub fn replay(
    dictionary: &[Word],
    max_guesses: usize,
    player: &PlayerConfig,
    rounds: &[(Word, Signature)],
) -> Result<GameSession, SessionError> {
    let mut session =
        GameSession::start_game(dictionary.iter().cloned(), max_guesses, player.clone())?;
    for (guess, signature) in rounds {
        session.report_signature(guess, signature.clone())?;
    }
    Ok(session)
}

/// Replay `rounds`, dropping trailing rounds that no longer apply
///
/// Feedback that emptied the candidate set is kept in `rounds` so it can be
/// undone; replaying it again would fail, so it is discarded here.
///
/// # Errors
///
/// Returns the session error only if no session can be started at all.
pub fn resume(
    dictionary: &[Word],
    max_guesses: usize,
    player: &PlayerConfig,
    rounds: &mut Vec<(Word, Signature)>,
) -> Result<GameSession, SessionError> {
    loop {
        match replay(dictionary, max_guesses, player, rounds) {
            Ok(session) => return Ok(session),
            Err(error) if !rounds.is_empty() => {
                tracing::debug!(
                    %error,
                    rounds = rounds.len(),
                    "dropping round that no longer applies"
                );
                rounds.pop();
            }
            Err(error) => return Err(error),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// session can be started over the dictionary.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(dictionary: &[Word], max_guesses: usize, player: &PlayerConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Distle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a word from the dictionary. I'll guess it.");
    println!("After each guess, enter the edit distance and operations:\n");
    println!("  - R = replace, T = transpose, I = insert, D = delete");
    println!("  - e.g. '2 RI', 'RI' or 'r,i' (the distance may be left out)");
    println!("  - Or type 'win' (or '0') if I got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last feedback\n");

    let mut rounds: Vec<(Word, Signature)> = Vec::new();
    let mut session = replay(dictionary, max_guesses, player, &rounds)?;

    loop {
        let guess = match session.next_guess() {
            Ok(guess) => guess,
            Err(error) => {
                println!("\n❌ {error}");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match parse_feedback(&get_user_input("Command")?) {
                    Ok(FeedbackCommand::Quit) => return Ok(()),
                    Ok(FeedbackCommand::Undo) => {
                        if rounds.pop().is_some() {
                            println!("✓ Undone! Back to turn {}\n", rounds.len() + 1);
                        } else {
                            println!("Nothing to undo!\n");
                        }
                    }
                    Ok(FeedbackCommand::NewGame) => {
                        rounds.clear();
                        println!("\n🔄 New game started!\n");
                    }
                    Ok(FeedbackCommand::Feedback(_)) => {
                        println!("No guess is pending.\n");
                        continue;
                    }
                    Err(error) => {
                        println!("❌ {error}\n");
                        continue;
                    }
                }
                session = resume(dictionary, max_guesses, player, &mut rounds)?;
                continue;
            }
        };

        let turn = session.history().len();
        let candidates: Vec<&Word> = session.candidates().live_words().collect();
        let metrics = calculate_metrics(&guess, &candidates);
        let (shortest, longest) = session.word_length_range();

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}/{}: {} candidates remaining (lengths {shortest}-{longest})",
            session.max_guesses(),
            candidates.len()
        );
        println!("────────────────────────────────────────────────────────────");

        println!(
            "\n📊 Suggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        );
        println!("   Avg distance:     {:.2}", metrics.average_distance);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!(
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        );

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &candidates {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        let signature = loop {
            let input = get_user_input("Enter feedback ('2 RI', 'win', or command)")?;

            match parse_feedback(&input) {
                Ok(FeedbackCommand::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Ok(FeedbackCommand::NewGame) => {
                    rounds.clear();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                Ok(FeedbackCommand::Undo) => {
                    if rounds.pop().is_some() {
                        println!("✓ Undone! Back to turn {}\n", rounds.len() + 1);
                    } else {
                        println!("Nothing to undo, asking again.\n");
                    }
                    break None;
                }
                Ok(FeedbackCommand::Feedback(signature)) => break Some(signature),
                Err(error) => println!("❌ {error}\n"),
            }
        };

        let Some(signature) = signature else {
            session = resume(dictionary, max_guesses, player, &mut rounds)?;
            continue;
        };

        match session.report_signature(&guess, signature.clone()) {
            Ok(remaining) => {
                rounds.push((guess.clone(), signature.clone()));
                println!(
                    "   {} {} → {remaining} candidates\n",
                    guess.text().to_uppercase(),
                    colored_ops(&signature)
                );
            }
            Err(SessionError::CandidateExhaustion(_)) => {
                rounds.push((guess.clone(), signature.clone()));
                println!("\n❌ No candidates remain! Your feedback may be incorrect.\n");
                continue;
            }
            Err(error) => {
                println!("❌ {error}\n");
                session = resume(dictionary, max_guesses, player, &mut rounds)?;
                continue;
            }
        }

        if signature.is_solved() {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉  D I S T L E   S O L V E D !  🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());
            println!(
                "\n  Solution found in {} {}",
                turn.to_string().bright_cyan().bold(),
                if turn == 1 { "guess" } else { "guesses" }
            );

            println!("\n  Guess history:");
            for (i, (word, sig)) in rounds.iter().enumerate() {
                println!(
                    "    {}. {}",
                    (i + 1).to_string().bright_black(),
                    signature_line(word, sig)
                );
            }
            println!("\n{}\n", "═".repeat(70).bright_cyan());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    rounds.clear();
                    session = replay(dictionary, max_guesses, player, &rounds)?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditOp;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_feedback("quit"), Ok(FeedbackCommand::Quit));
        assert_eq!(parse_feedback(" NEW "), Ok(FeedbackCommand::NewGame));
        assert_eq!(parse_feedback("u"), Ok(FeedbackCommand::Undo));
        assert_eq!(
            parse_feedback("win"),
            Ok(FeedbackCommand::Feedback(Signature::SOLVED))
        );
    }

    #[test]
    fn parse_signatures() {
        let expected = Signature::new(2, vec![EditOp::Replace, EditOp::Insert]).unwrap();
        for input in ["2 RI", "ri", "r,i"] {
            assert_eq!(
                parse_feedback(input),
                Ok(FeedbackCommand::Feedback(expected.clone())),
                "{input}"
            );
        }
        assert!(parse_feedback("3 RI").is_err());
        assert!(parse_feedback("xyz").is_err());
    }

    #[test]
    fn replay_drops_undone_rounds() {
        let dictionary = words_from_slice(&["act", "bat", "cat", "hat", "mat"]);
        let player = PlayerConfig::default();
        let guess = Word::new("act").unwrap();
        let signature = Signature::calculate(&guess, &Word::new("hat").unwrap());

        let mut rounds = vec![(guess, signature)];
        let session = replay(&dictionary, 10, &player, &rounds).unwrap();
        assert!(session.candidates().len() < dictionary.len());

        rounds.pop();
        let session = replay(&dictionary, 10, &player, &rounds).unwrap();
        assert_eq!(session.candidates().len(), dictionary.len());
    }

    #[test]
    fn emptying_round_fails_replay() {
        let dictionary = words_from_slice(&["act", "bat", "cat"]);
        let player = PlayerConfig::default();
        let guess = Word::new("act").unwrap();
        let impossible = Signature::new(
            3,
            vec![EditOp::Transpose, EditOp::Transpose, EditOp::Transpose],
        )
        .unwrap();

        let rounds = vec![(guess.clone(), impossible)];
        assert!(matches!(
            replay(&dictionary, 10, &player, &rounds),
            Err(SessionError::CandidateExhaustion(word)) if word == guess
        ));
    }

    #[test]
    fn resume_discards_emptying_round() {
        let dictionary = words_from_slice(&["act", "bat", "cat", "hat", "mat"]);
        let player = PlayerConfig::default();
        let first = Word::new("act").unwrap();
        let kept = Signature::calculate(&first, &Word::new("hat").unwrap());
        let second = Word::new("bat").unwrap();
        let impossible = Signature::new(
            3,
            vec![EditOp::Transpose, EditOp::Transpose, EditOp::Transpose],
        )
        .unwrap();

        let mut rounds = vec![(first.clone(), kept.clone()), (second, impossible)];
        let mut session = resume(&dictionary, 10, &player, &mut rounds).unwrap();

        assert_eq!(rounds, vec![(first, kept)]);
        assert_eq!(session.history().len(), 1);
        assert!(session.candidates().contains(&Word::new("hat").unwrap()));
        assert!(session.next_guess().is_ok());
    }

    #[test]
    fn resume_reports_unstartable_session() {
        let dictionary = words_from_slice(&["act", "bat"]);
        let mut rounds = Vec::new();
        assert!(matches!(
            resume(&dictionary, 0, &PlayerConfig::default(), &mut rounds),
            Err(SessionError::NoGuessesAllowed)
        ));
    }
}
