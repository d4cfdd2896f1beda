//! TUI application state and logic

use crate::commands::simple::replay;
use crate::core::{Signature, Word};
use crate::solver::metrics::calculate_metrics;
use crate::solver::{GameSession, PlayerConfig, SessionError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [Word],
    pub player: PlayerConfig,
    pub max_guesses: usize,
    pub session: GameSession,
    /// Consumed feedback, replayed to undo
    pub rounds: Vec<(Word, Signature)>,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub signature: Signature,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: Word,
    pub average_distance: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    /// Chosen by the user rather than the session
    pub manual: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    /// Create the app with a fresh session
    ///
    /// # Errors
    ///
    /// Returns the session error if the dictionary is empty or
    /// `max_guesses` is zero.
    pub fn new(
        dictionary: &'a [Word],
        player: PlayerConfig,
        max_guesses: usize,
    ) -> Result<Self, SessionError> {
        let session = replay(dictionary, max_guesses, &player, &[])?;

        Ok(Self {
            dictionary,
            player,
            max_guesses,
            session,
            rounds: Vec::new(),
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Think of a word and I'll find it by edit distance.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as distance and ops (e.g. '2 RI', 'TD', or 'win')"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                guess_distribution: vec![0; max_guesses + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        })
    }

    fn describe(&self, word: Word, manual: bool) -> GuessInfo {
        let candidates: Vec<&Word> = self.session.candidates().live_words().collect();
        let metrics = calculate_metrics(&word, &candidates);

        GuessInfo {
            word,
            average_distance: metrics.average_distance,
            expected_remaining: metrics.expected_remaining,
            max_partition: metrics.max_partition,
            manual,
        }
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.next_guess() {
            Ok(word) => {
                self.current_guess = Some(self.describe(word, false));
            }
            Err(error) => {
                self.current_guess = None;
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Rebuild the session from the recorded rounds
    fn rebuild(&mut self) -> bool {
        match replay(self.dictionary, self.max_guesses, &self.player, &self.rounds) {
            Ok(session) => {
                self.session = session;
                true
            }
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
                false
            }
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let input = feedback.trim().to_lowercase();
        let parsed = match input.as_str() {
            "win" | "correct" | "solved" => Ok(Signature::SOLVED),
            other => other.parse::<Signature>(),
        };

        let signature = match parsed {
            Ok(signature) => signature,
            Err(error) => {
                self.add_message(&format!("Invalid feedback: {error}"), MessageStyle::Error);
                return;
            }
        };

        let Some(guess) = self.current_guess.as_ref().map(|info| info.word.clone()) else {
            self.add_message("No guess to give feedback on", MessageStyle::Error);
            return;
        };

        let candidates_before = self.session.candidates().len();
        let result = self.session.report_signature(&guess, signature.clone());

        let candidates_after = match result {
            Ok(after) => after,
            Err(SessionError::CandidateExhaustion(_)) => 0,
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.rounds.push((guess.clone(), signature.clone()));
        self.history.push(HistoryEntry {
            guess,
            signature: signature.clone(),
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        if signature.is_solved() {
            let guess_count = self.history.len();
            self.stats.games_won += 1;
            self.stats.total_games += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            self.input_mode = InputMode::WinCelebration;
            self.current_guess = None;

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                n => format!("🎉 SOLVED in {n} guesses! 🎉"),
            };
            self.add_message(&celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if candidates_after == 0 {
            self.current_guess = None;
            self.add_message(
                "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::WinCelebration && !self.history.is_empty() {
            self.stats.total_games += 1;
        }

        self.rounds.clear();
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;

        if self.rebuild() {
            self.add_message("New game started!", MessageStyle::Info);
            self.compute_suggestion();
        }
    }

    pub fn undo_last(&mut self) {
        if self.rounds.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }
        self.history.pop();
        self.input_mode = InputMode::Feedback;

        if self.rebuild() {
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    /// Replace the suggestion with a word typed by the user
    pub fn use_manual_word(&mut self) {
        let word = match Word::new(self.manual_word.as_str()) {
            Ok(word) => word,
            Err(error) => {
                self.add_message(&format!("Invalid word: {error}"), MessageStyle::Error);
                return;
            }
        };

        if !self.dictionary.contains(&word) {
            self.add_message(
                &format!("Word '{}' not in dictionary!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }
        if self.session.history().contains(&word) && self.session.pending() != Some(&word) {
            self.add_message(
                &format!("'{}' was already guessed", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        // Drop the outstanding suggestion so feedback for the typed word is accepted
        if !self.rebuild() {
            return;
        }

        let suggested = self.current_guess.take();
        let info = self.describe(word, true);

        if let Some(suggested) = suggested
            && suggested.expected_remaining < info.expected_remaining
        {
            self.add_message(
                &format!(
                    "Note: {} was expected to leave {:.1} fewer candidates",
                    suggested.word.text().to_uppercase(),
                    info.expected_remaining - suggested.expected_remaining
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (avg distance {:.2}, {:.1} expected left)",
                info.word.text().to_uppercase(),
                info.average_distance,
                info.expected_remaining
            ),
            MessageStyle::Success,
        );

        self.current_guess = Some(info);
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Tab => {
                        if app.get_candidates_count() > 0 {
                            app.input_mode = InputMode::ManualWord;
                            app.add_message("Enter your own word", MessageStyle::Info);
                        }
                    }
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualWord => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                        app.add_message("Cancelled manual word entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c) if c.is_alphabetic() => {
                        app.manual_word.extend(c.to_lowercase());
                    }
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => app.use_manual_word(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["act", "bat", "cart", "cat", "chat", "hat", "mat", "tac"])
    }

    fn feedback_for(app: &App, secret: &str) -> String {
        let guess = &app.current_guess.as_ref().unwrap().word;
        Signature::calculate(guess, &Word::new(secret).unwrap()).to_string()
    }

    #[test]
    fn plays_to_win() {
        let words = dictionary();
        let mut app = App::new(&words, PlayerConfig::default(), 10).unwrap();
        app.compute_suggestion();

        for _ in 0..words.len() {
            let input = feedback_for(&app, "mat");
            app.handle_feedback(&input);
            if app.input_mode == InputMode::WinCelebration {
                break;
            }
        }

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.history.last().unwrap().guess.text(), "mat");
    }

    #[test]
    fn invalid_feedback_keeps_state() {
        let words = dictionary();
        let mut app = App::new(&words, PlayerConfig::default(), 10).unwrap();
        app.compute_suggestion();

        app.handle_feedback("3 R");
        assert!(app.history.is_empty());
        assert_eq!(app.get_candidates_count(), words.len());
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn undo_restores_candidates() {
        let words = dictionary();
        let mut app = App::new(&words, PlayerConfig::default(), 10).unwrap();
        app.compute_suggestion();

        let input = feedback_for(&app, "hat");
        app.handle_feedback(&input);
        assert!(app.get_candidates_count() < words.len());

        app.undo_last();
        assert_eq!(app.get_candidates_count(), words.len());
        assert!(app.history.is_empty());
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "act");
    }

    #[test]
    fn manual_word_replaces_suggestion() {
        let words = dictionary();
        let mut app = App::new(&words, PlayerConfig::default(), 10).unwrap();
        app.compute_suggestion();

        app.manual_word = "hat".to_string();
        app.use_manual_word();

        let current = app.current_guess.as_ref().unwrap();
        assert_eq!(current.word.text(), "hat");
        assert!(current.manual);

        let input = feedback_for(&app, "cat");
        app.handle_feedback(&input);
        assert_eq!(app.history[0].guess.text(), "hat");
        assert_eq!(app.get_candidates_count(), 3); // bat, cat, mat
    }

    #[test]
    fn manual_word_must_be_in_dictionary() {
        let words = dictionary();
        let mut app = App::new(&words, PlayerConfig::default(), 10).unwrap();
        app.compute_suggestion();

        app.manual_word = "zebra".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "act");
        assert_eq!(app.input_mode, InputMode::Feedback);
    }
}
