//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the practice
//! sessions. It is the single entry point for every wordly operation, whatever
//! the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Snapshots** stored weeks into sessions, so sessions never hold the store
//! - **Persists** the quiz score when a session step reports completion
//! - **Returns structured types** (`Result<CmdResult>`, sessions, steps)
//!
//! It does no printing, prompting or audio.
//!
//! ## Generic Over DataStore
//!
//! `WordlyApi<S: DataStore>` is generic over the storage backend:
//! - Production: `WordlyApi<FileStore>`
//! - Testing: `WordlyApi<InMemoryStore>`

use crate::commands;
use crate::config::WordlyConfig;
use crate::error::Result;
use crate::present::WeekListing;
use crate::session::flashcard::FlashcardSession;
use crate::session::spelling::{SpellingQuiz, Step};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct WordlyApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> WordlyApi<S> {
    pub fn new(store: S, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn list_weeks(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// Same as [`list_weeks`](Self::list_weeks), shaped for a presenter.
    pub fn week_listing(&self, filter: Option<&str>) -> Result<WeekListing> {
        let result = commands::list::run(&self.store, filter)?;
        Ok(WeekListing::new(result.listed_weeks, filter))
    }

    pub fn get_week(&self, name: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, name)
    }

    pub fn save_week(&mut self, name: &str, raw_words: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, name, raw_words)
    }

    pub fn delete_week(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn export_weeks(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn export_to_file(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::to_file(&self.store, path)
    }

    pub fn import_json(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, text)
    }

    pub fn import_json_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::from_file(&mut self.store, path)
    }

    pub fn import_csv(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::csv::run(&mut self.store, text)
    }

    pub fn import_csv_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::csv::from_file(&mut self.store, path)
    }

    pub fn fetch_csv(&mut self, url: &str) -> Result<commands::CmdResult> {
        let timeout = self.settings().fetch_timeout();
        commands::fetch::run(&mut self.store, url, timeout)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn load_config(&self) -> Result<WordlyConfig> {
        WordlyConfig::load(&self.data_dir)
    }

    /// Config for session pacing and fetches. A broken `config.json` never
    /// blocks practice; it falls back to defaults.
    fn settings(&self) -> WordlyConfig {
        self.load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable config, using defaults");
            WordlyConfig::default()
        })
    }

    /// A flashcard deck over a snapshot of the named week.
    pub fn start_flashcards(&self, name: &str, shuffle: bool) -> Result<FlashcardSession> {
        let week = commands::get::find(&self.store, name)?;
        let mut session = FlashcardSession::new();
        session.load(&week.words);
        if shuffle {
            session.shuffle();
        }
        Ok(session)
    }

    /// A started quiz over a snapshot of the named week, plus its opening step.
    pub fn start_spelling(&self, name: &str) -> Result<(SpellingQuiz, Step)> {
        let week = commands::get::find(&self.store, name)?;
        let mut quiz = SpellingQuiz::new(self.settings().prompt_delay());
        let step = quiz.start(&week.words);
        Ok((quiz, step))
    }

    pub fn submit_spelling(&mut self, quiz: &mut SpellingQuiz, answer: &str) -> Result<Step> {
        let step = quiz.submit(answer)?;
        self.record_completion(&step)?;
        Ok(step)
    }

    pub fn skip_spelling(&mut self, quiz: &mut SpellingQuiz) -> Result<Step> {
        let step = quiz.skip()?;
        self.record_completion(&step)?;
        Ok(step)
    }

    fn record_completion(&mut self, step: &Step) -> Result<()> {
        if let Some(score) = step.completed {
            commands::stats::record(&mut self.store, score)?;
        }
        Ok(())
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordlyError;
    use crate::model::WordList;
    use crate::session::spelling::QuizState;
    use crate::store::memory::InMemoryStore;

    fn api_with(weeks: Vec<WordList>) -> (WordlyApi<InMemoryStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let api = WordlyApi::new(InMemoryStore::with_weeks(weeks), dir.path());
        (api, dir)
    }

    fn week(name: &str, words: &[&str]) -> WordList {
        WordList::new(name, words.iter().copied()).unwrap()
    }

    #[test]
    fn save_then_list_and_get() {
        let (mut api, _dir) = api_with(vec![]);
        api.save_week("Week 1", "Apple, banana").unwrap();

        let listed = api.list_weeks(None).unwrap().listed_weeks;
        assert_eq!(listed, vec![week("Week 1", &["apple", "banana"])]);
        let got = api.get_week("Week 1").unwrap().listed_weeks;
        assert_eq!(got[0].words, vec!["apple", "banana"]);
    }

    #[test]
    fn week_listing_keeps_filter() {
        let (api, _dir) = api_with(vec![week("Week 1", &["a"]), week("Animals", &["cat"])]);
        let listing = api.week_listing(Some(" week ")).unwrap();
        assert_eq!(listing.filter.as_deref(), Some("week"));
        assert_eq!(listing.weeks.len(), 1);
    }

    #[test]
    fn failed_import_leaves_collection() {
        let (mut api, _dir) = api_with(vec![week("Week 1", &["a"])]);
        assert!(api.import_json(r#"{"foo":1}"#).is_err());
        assert_eq!(api.list_weeks(None).unwrap().listed_weeks.len(), 1);
    }

    #[test]
    fn flashcards_for_unknown_week_fail() {
        let (api, _dir) = api_with(vec![]);
        assert!(matches!(
            api.start_flashcards("nope", false),
            Err(WordlyError::WeekNotFound(_))
        ));
    }

    #[test]
    fn flashcards_snapshot_survives_edits() {
        let (mut api, _dir) = api_with(vec![week("Week 1", &["apple"])]);
        let session = api.start_flashcards("Week 1", false).unwrap();
        api.save_week("Week 1", "zebra").unwrap();
        assert_eq!(session.current_word(), Some("apple"));
    }

    #[test]
    fn finishing_quiz_persists_score() {
        let (mut api, _dir) = api_with(vec![week("Week 1", &["whale", "owl"])]);
        let (mut quiz, opening) = api.start_spelling("Week 1").unwrap();
        assert_eq!(opening.cues.len(), 2);

        let first = quiz.current_word().unwrap().to_string();
        let step = api.submit_spelling(&mut quiz, &first).unwrap();
        assert!(step.completed.is_none());
        assert!(api.stats().unwrap().stats.unwrap().last_score.is_none());

        let step = api.skip_spelling(&mut quiz).unwrap();
        assert!(step.completed.is_some());
        assert_eq!(quiz.state(), QuizState::Finished);

        let score = api.stats().unwrap().stats.unwrap().last_score.unwrap();
        assert_eq!(score.total, 2);
        assert_eq!(score.correct, 1);
    }

    #[test]
    fn corrupt_config_falls_back_to_defaults() {
        let (mut api, dir) = api_with(vec![week("Week 1", &["whale"])]);
        std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

        let (mut quiz, opening) = api.start_spelling("Week 1").unwrap();
        assert_eq!(
            opening.cues[1].delay,
            WordlyConfig::default().prompt_delay()
        );
        let step = api.submit_spelling(&mut quiz, "whale").unwrap();
        assert!(step.completed.is_some());
    }

    #[test]
    fn quiz_uses_configured_prompt_delay() {
        let (api, _dir) = api_with(vec![week("Week 1", &["whale"])]);
        api.config(ConfigAction::Set("prompt-delay-ms".into(), "0".into()))
            .unwrap();
        let (_, opening) = api.start_spelling("Week 1").unwrap();
        assert!(opening.cues[1].delay.is_zero());
    }
}
