use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes the week with exactly this name. Absence is a no-op.
pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut weeks = store.load_weeks()?;
    let mut result = CmdResult::default();

    let Some(pos) = weeks.iter().position(|w| w.name == name) else {
        result.add_message(CmdMessage::info(format!("No week named {}", name)));
        return Ok(result);
    };

    let removed = weeks.remove(pos);
    store.save_weeks(&weeks)?;
    tracing::info!(week = %removed.name, "deleted week");
    result.add_message(CmdMessage::success(format!("Deleted {}", removed.name)));
    Ok(result.with_affected_weeks(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::WordList;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        InMemoryStore::with_weeks(vec![
            WordList::new("Week 1", ["apple"]).unwrap(),
            WordList::new("Week 2", ["dog"]).unwrap(),
        ])
    }

    #[test]
    fn removes_exact_match() {
        let mut store = seeded();
        let result = run(&mut store, "Week 1").unwrap();
        assert_eq!(result.affected_weeks[0].name, "Week 1");
        let names: Vec<_> = store.load_weeks().unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Week 2"]);
    }

    #[test]
    fn absent_name_is_noop() {
        let mut store = seeded();
        // a write would fail, proving nothing is persisted
        store.set_simulate_write_error(true);
        let result = run(&mut store, "week 1").unwrap();
        assert!(result.affected_weeks.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.load_weeks().unwrap().len(), 2);
    }
}
