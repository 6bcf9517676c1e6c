//! # Terminal Rendering
//!
//! [`TerminalPresenter`] turns listings and session views into colored text.
//! Layout math (widths, truncation, padding) is unicode-aware; color is left
//! to `colored`, which drops escape codes when stdout is not a terminal.

use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordly::api::{CmdMessage, MessageLevel};
use wordly::model::LastScore;
use wordly::present::{Presenter, WeekListing};
use wordly::session::flashcard::{CardFace, FlashcardView};
use wordly::session::spelling::{QuizState, SpellingView, Verdict};

const LINE_WIDTH: usize = 80;
const NAME_WIDTH: usize = 24;
const BAR_WIDTH: usize = 20;

pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render_weeks(&mut self, listing: &WeekListing) -> String {
        if listing.weeks.is_empty() {
            return match &listing.filter {
                Some(filter) => format!("No weeks match \"{}\".", filter),
                None => "No weeks yet. Add one with `wordly save <name> <words>...`.".to_string(),
            };
        }

        let mut lines = Vec::with_capacity(listing.weeks.len());
        for week in &listing.weeks {
            let name = truncate_to_width(&week.name, NAME_WIDTH);
            let padding = NAME_WIDTH.saturating_sub(name.width());
            let count = format!("{:>3} words", week.words.len());
            let available = LINE_WIDTH.saturating_sub(2 + NAME_WIDTH + 2 + count.width() + 2);
            let preview = truncate_to_width(&week.words.join(", "), available);
            lines.push(format!(
                "  {}{}  {}  {}",
                name.bold(),
                " ".repeat(padding),
                count.dimmed(),
                preview
            ));
        }
        lines.join("\n")
    }

    fn render_flashcard(&mut self, view: &FlashcardView) -> String {
        let counter = format!("[{}/{}]", view.position + 1, view.total).dimmed();
        match &view.face {
            CardFace::Empty => "This week has no words.".to_string(),
            CardFace::Hidden => format!("{} {}", counter, "? ? ?".yellow()),
            CardFace::Shown(word) => format!("{} {}", counter, word.bold().green()),
        }
    }

    fn render_spelling(&mut self, view: &SpellingView) -> String {
        let mut out = Vec::new();
        if let Some(verdict) = &view.last_verdict {
            out.push(render_verdict(verdict));
        }
        match view.state {
            QuizState::Idle => out.push("Nothing to practice.".to_string()),
            QuizState::Active => out.push(format!(
                "{} {}/{}  {}",
                progress_bar(view.progress),
                view.position + 1,
                view.total,
                "Type the word you hear (:hint :skip :say :quit)".dimmed()
            )),
            QuizState::Finished => {
                let score = LastScore::new(view.total, view.correct);
                out.push(format!(
                    "{} {}",
                    progress_bar(view.progress),
                    "All done!".bold()
                ));
                out.push(format!(
                    "You got {}/{} right {}",
                    view.correct,
                    view.total,
                    stars(score.stars()).yellow()
                ));
            }
        }
        out.join("\n")
    }
}

fn render_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct => "✓ Correct!".green().to_string(),
        Verdict::Incorrect { expected } => {
            format!("{} {}", "✗ The word was".red(), expected.bold())
        }
        Verdict::Skipped => "Skipped.".dimmed().to_string(),
    }
}

pub(super) fn render_hint(masked: &str) -> String {
    format!("Hint: {}", masked.cyan())
}

pub(super) fn progress_bar(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round()) as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

pub(super) fn stars(count: u8) -> String {
    let count = usize::from(count.min(3));
    format!("{}{}", "★".repeat(count), "☆".repeat(3 - count))
}

pub(super) fn render_score(score: Option<&LastScore>) -> String {
    match score {
        None => "No quiz finished yet.".to_string(),
        Some(score) => format!(
            "Last score: {}/{} {}  {}",
            score.correct,
            score.total,
            stars(score.stars()).yellow(),
            format_time_ago(score.date).dimmed()
        ),
    }
}

pub(super) fn render_words(name: &str, words: &[String]) -> String {
    let mut out = vec![format!("{} ({} words)", name.bold(), words.len())];
    out.extend(words.iter().map(|w| format!("  {}", w)));
    out.join("\n")
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
