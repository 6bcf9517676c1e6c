use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordlyError};
use crate::model::WordList;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

const INVALID_FILE: &str = "Invalid file";

/// Replaces the whole collection. Entries are stored verbatim so that an
/// exported document imports back unchanged.
pub fn replace_all<S: DataStore>(store: &mut S, entries: Vec<WordList>) -> Result<()> {
    if !entries.iter().all(WordList::is_valid) {
        return Err(WordlyError::Parse(INVALID_FILE.to_string()));
    }
    store.save_weeks(&entries)?;
    tracing::info!(count = entries.len(), "replaced week collection");
    Ok(())
}

/// Parses an export document: a top-level array of `{ name, words }`.
pub fn parse_json(text: &str) -> Result<Vec<WordList>> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|_| WordlyError::Parse(INVALID_FILE.to_string()))?;
    if !value.is_array() {
        return Err(WordlyError::Parse(INVALID_FILE.to_string()));
    }
    serde_json::from_value(value).map_err(|_| WordlyError::Parse(INVALID_FILE.to_string()))
}

pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let entries = parse_json(text)?;
    replace_all(store, entries.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Imported {} weeks", entries.len())));
    Ok(result.with_affected_weeks(entries))
}

pub fn from_file<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(WordlyError::Io)?;
    run(store, &text)
}
