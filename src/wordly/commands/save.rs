use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{split_raw_words, WordList};
use crate::store::DataStore;

/// Normalizes `entry` and stores it, replacing any week with the same name or
/// appending a new one. Nothing is written if normalization rejects the entry.
pub fn upsert<S: DataStore>(store: &mut S, entry: WordList) -> Result<WordList> {
    let entry = WordList::new(&entry.name, &entry.words)?;
    let mut weeks = store.load_weeks()?;
    match weeks.iter_mut().find(|w| w.name == entry.name) {
        Some(existing) => *existing = entry.clone(),
        None => weeks.push(entry.clone()),
    }
    store.save_weeks(&weeks)?;
    tracing::info!(week = %entry.name, words = entry.words.len(), "saved week");
    Ok(entry)
}

/// Saves a week from free-form text, split on newlines and commas.
pub fn run<S: DataStore>(store: &mut S, name: &str, raw_words: &str) -> Result<CmdResult> {
    let entry = WordList {
        name: name.to_string(),
        words: split_raw_words(raw_words)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    let saved = upsert(store, entry)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} ({} words)",
        saved.name,
        saved.words.len()
    )));
    Ok(result.with_affected_weeks(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordlyError;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    fn raw(name: &str, words: &[&str]) -> WordList {
        WordList {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn upsert_appends_new_week() {
        let mut store = InMemoryStore::new();
        upsert(&mut store, raw("Week 1", &["apple"])).unwrap();
        upsert(&mut store, raw("Week 2", &["dog"])).unwrap();
        let names: Vec<_> = store.load_weeks().unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Week 1", "Week 2"]);
    }

    #[test]
    fn upsert_replaces_same_name_in_place() {
        let mut store = InMemoryStore::new();
        upsert(&mut store, raw("Week 1", &["apple"])).unwrap();
        upsert(&mut store, raw("Week 2", &["dog"])).unwrap();
        upsert(&mut store, raw("Week 1", &["pear"])).unwrap();

        let weeks = store.load_weeks().unwrap();
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0], WordList::new("Week 1", ["pear"]).unwrap());
    }

    #[test]
    fn upsert_leaves_single_entry_without_folded_duplicates() {
        let mut store = InMemoryStore::new();
        upsert(&mut store, raw("Week 1", &["Apple", "APPLE", " apple ", "Bear"])).unwrap();
        upsert(&mut store, raw("Week 1", &["Cat", "cAT", "dog"])).unwrap();

        let weeks = store.load_weeks().unwrap();
        let matching: Vec<_> = weeks.iter().filter(|w| w.name == "Week 1").collect();
        assert_eq!(matching.len(), 1);
        let folded: HashSet<String> = matching[0].words.iter().map(|w| w.to_lowercase()).collect();
        assert_eq!(folded.len(), matching[0].words.len());
    }

    #[test]
    fn upsert_with_no_words_signals_validation_and_keeps_collection() {
        let mut store = InMemoryStore::new();
        upsert(&mut store, raw("Week 1", &["apple"])).unwrap();
        let before = store.load_weeks().unwrap();

        let err = upsert(&mut store, raw("Week 1", &["  ", ""])).unwrap_err();
        assert!(matches!(err, WordlyError::Validation(_)));
        assert_eq!(store.load_weeks().unwrap(), before);
    }

    #[test]
    fn upsert_with_blank_name_signals_validation() {
        let mut store = InMemoryStore::new();
        let err = upsert(&mut store, raw("   ", &["apple"])).unwrap_err();
        assert!(matches!(err, WordlyError::Validation(_)));
        assert!(store.load_weeks().unwrap().is_empty());
    }

    #[test]
    fn upsert_trims_name_before_matching() {
        let mut store = InMemoryStore::new();
        upsert(&mut store, raw("Week 1", &["apple"])).unwrap();
        upsert(&mut store, raw("  Week 1  ", &["pear"])).unwrap();
        assert_eq!(store.load_weeks().unwrap().len(), 1);
    }

    #[test]
    fn run_splits_free_text() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Week 3", "Apple, banana\nBANANA\ncherry").unwrap();
        assert_eq!(result.affected_weeks[0].words, vec!["apple", "banana", "cherry"]);
        assert!(result.messages[0].content.contains("3 words"));
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let err = upsert(&mut store, raw("Week 1", &["apple"])).unwrap_err();
        assert!(matches!(err, WordlyError::Store(_)));
    }
}
