//! TUI rendering with ratatui
//!
//! Visualizations for the Distle solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{EditOp, Signature, Word, word_distance};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn op_color(op: EditOp) -> Color {
    match op {
        EditOp::Replace => Color::Yellow,
        EditOp::Transpose => Color::Magenta,
        EditOp::Insert => Color::Green,
        EditOp::Delete => Color::Red,
    }
}

/// Feedback as colored spans: distance then one span per tag
fn signature_spans(signature: &Signature) -> Vec<Span<'static>> {
    if signature.is_solved() {
        return vec![Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];
    }

    let mut spans = vec![Span::raw(format!("[{}] ", signature.distance()))];
    spans.extend(signature.ops().iter().map(|&op| {
        Span::styled(
            op.tag().to_string(),
            Style::default()
                .fg(op_color(op))
                .add_modifier(Modifier::BOLD),
        )
    }));
    spans
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 DISTLE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current guess info
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = &app.current_guess else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    let label = if guess.manual { "Your word: " } else { "Suggested: " };
    let (shortest, longest) = app.session.word_length_range();

    let content = vec![
        Line::from(vec![
            Span::raw(label),
            Span::styled(
                guess.word.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} letters)", guess.word.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("Avg distance: {:.2}", guess.average_distance)),
        Line::from(format!(
            "Expected:     {:.1} candidates remain",
            guess.expected_remaining
        )),
        Line::from(format!("Worst:        {} candidates", guess.max_partition)),
        Line::from(format!("Lengths:      {shortest}-{longest} letters")),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates: Vec<&Word> = app.session.candidates().live_words().collect();

    let content = if candidates.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if candidates.len() <= 12 {
        let mut lines = vec![Line::from("Remaining (distance from current guess):")];

        for candidate in &candidates {
            let distance = app
                .current_guess
                .as_ref()
                .map(|guess| word_distance(&guess.word, candidate));

            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(
                    format!("{:<10}", candidate.text().to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    distance.map_or_else(String::new, |d| format!(" {d}")),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!(
                "{}: {} ",
                app.history.len() - i,
                entry.guess.text().to_uppercase()
            ))];
            spans.extend(signature_spans(&entry.signature));
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.candidates().total().max(1) as f64;
    let remaining = app.get_candidates_count().max(1) as f64;
    let total_bits = total.log2();
    let bits_gained = (total / remaining).log2();
    let progress_pct = if total_bits > 0.0 {
        ((bits_gained / total_bits * 100.0).min(100.0)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {} guesses left",
            app.session.guesses_remaining()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (distance + R/T/I/D, or 'win') | TAB for manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Strategy: {}", app.session.strategy()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!("Candidates: {}", app.get_candidates_count());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.current_guess.is_none() && !app.history.is_empty() {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Word"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PlayerConfig;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn signature_spans_per_tag() {
        let signature = Signature::new(2, vec![EditOp::Replace, EditOp::Insert]).unwrap();
        let spans = signature_spans(&signature);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "R");
        assert_eq!(spans[2].style.fg, Some(Color::Green));
        assert_eq!(signature_spans(&Signature::SOLVED).len(), 1);
    }

    #[test]
    fn renders_without_panicking() {
        let words = words_from_slice(&["act", "bat", "cat", "hat"]);
        let mut app = App::new(&words, PlayerConfig::default(), 10).unwrap();
        app.compute_suggestion();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("DISTLE SOLVER"));
        assert!(text.contains("ACT"));
    }
}
