use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordlyError};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILENAME: &str = "wordlywise_weeks.json";

/// Pretty-printed JSON of the collection in stored order.
pub fn to_json<S: DataStore>(store: &S) -> Result<String> {
    let weeks = store.load_weeks()?;
    serde_json::to_string_pretty(&weeks).map_err(WordlyError::Serialization)
}

/// Returns the export document without touching the filesystem.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_exported(to_json(store)?))
}

/// Writes the export document to `path`.
pub fn to_file<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let document = to_json(store)?;
    fs::write(path, &document).map_err(WordlyError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
    Ok(result.with_exported(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordList;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn exports_stored_order_pretty_printed() {
        let store = InMemoryStore::with_weeks(vec![
            WordList::new("Week 2", ["zebra", "apple"]).unwrap(),
            WordList::new("Week 1", ["cat"]).unwrap(),
        ]);
        let json = to_json(&store).unwrap();
        assert!(json.contains('\n'));
        let parsed: Vec<WordList> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store.load_weeks().unwrap());
    }

    #[test]
    fn empty_store_exports_empty_array() {
        let json = to_json(&InMemoryStore::new()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn to_file_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);
        let store = InMemoryStore::with_weeks(vec![WordList::new("Week 1", ["cat"]).unwrap()]);
        let result = to_file(&store, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), result.exported.unwrap());
        assert!(result.messages[0].content.starts_with("Exported to"));
    }
}
