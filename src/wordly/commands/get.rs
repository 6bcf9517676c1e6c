use crate::commands::CmdResult;
use crate::error::{Result, WordlyError};
use crate::model::WordList;
use crate::store::DataStore;

/// Finds a week by exact (case-sensitive) name.
pub fn find<S: DataStore>(store: &S, name: &str) -> Result<WordList> {
    store
        .load_weeks()?
        .into_iter()
        .find(|w| w.name == name)
        .ok_or_else(|| WordlyError::WeekNotFound(name.to_string()))
}

pub fn run<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let week = find(store, name)?;
    Ok(CmdResult::default().with_listed_weeks(vec![week]))
}
