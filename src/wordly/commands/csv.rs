use crate::commands::save::upsert;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordlyError};
use crate::model::{normalize_words, WordList};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

pub const DEFAULT_WEEK_NAME: &str = "Imported Week";

/// Parses spreadsheet-style CSV into a week.
///
/// A first line holding a single token that mentions "week" names the list;
/// every other comma-separated token becomes a word. The returned list may be
/// empty; callers decide whether that is an error.
pub fn parse(text: &str) -> WordList {
    let mut name = DEFAULT_WEEK_NAME.to_string();
    let mut words = Vec::new();

    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    for (i, line) in lines.enumerate() {
        let parts: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if i == 0 && parts.len() == 1 && parts[0].to_lowercase().contains("week") {
            name = parts[0].to_string();
            continue;
        }
        words.extend(parts);
    }

    WordList {
        name,
        words: normalize_words(words),
    }
}

/// Parses CSV text and upserts the resulting week by name.
pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let pack = parse(text);
    if pack.words.is_empty() {
        return Err(WordlyError::Parse("No words found in CSV".to_string()));
    }
    let saved = upsert(store, pack)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} ({} words)",
        saved.name,
        saved.words.len()
    )));
    Ok(result.with_affected_weeks(vec![saved]))
}

pub fn from_file<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(WordlyError::Io)?;
    run(store, &text)
}
