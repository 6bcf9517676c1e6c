use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{compare_names, fold, WordList};
use crate::store::DataStore;

/// Lists weeks sorted by name, optionally narrowed to names containing `filter`
/// (case-insensitive).
pub fn run<S: DataStore>(store: &S, filter: Option<&str>) -> Result<CmdResult> {
    let needle = filter.map(fold).filter(|f| !f.is_empty());
    let listed: Vec<WordList> = sorted_weeks(store)?
        .into_iter()
        .filter(|w| match &needle {
            Some(needle) => w.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    Ok(CmdResult::default().with_listed_weeks(listed))
}

/// All stored weeks in display order.
pub fn sorted_weeks<S: DataStore>(store: &S) -> Result<Vec<WordList>> {
    let mut weeks = store.load_weeks()?;
    weeks.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        InMemoryStore::with_weeks(vec![
            WordList::new("Week 2", ["dog"]).unwrap(),
            WordList::new("animals", ["cat"]).unwrap(),
            WordList::new("Week 1", ["apple"]).unwrap(),
        ])
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed_weeks.iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn lists_sorted_by_name() {
        let result = run(&seeded(), None).unwrap();
        assert_eq!(names(&result), vec!["animals", "Week 1", "Week 2"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let result = run(&seeded(), Some("  WEEK ")).unwrap();
        assert_eq!(names(&result), vec!["Week 1", "Week 2"]);
    }

    #[test]
    fn blank_filter_lists_everything() {
        let result = run(&seeded(), Some("   ")).unwrap();
        assert_eq!(result.listed_weeks.len(), 3);
    }

    #[test]
    fn listing_does_not_reorder_storage() {
        let store = seeded();
        run(&store, None).unwrap();
        assert_eq!(store.load_weeks().unwrap()[0].name, "Week 2");
    }
}
