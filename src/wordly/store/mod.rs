//! # Storage Layer
//!
//! The [`DataStore`] trait is the key-value persistence behind the word list
//! collection and the quiz stats. Commands only ever see the trait, so the same
//! logic runs against disk in production and against memory in tests.
//!
//! ## Documents
//!
//! Two independently keyed JSON documents, no schema version:
//!
//! ```text
//! <data dir>/
//! ├── weeks.json     # ordered array of { name, words }
//! ├── stats.json     # { "lastScore": { total, correct, date } }
//! └── config.json    # see config.rs
//! ```
//!
//! ## Read Recovery
//!
//! A document that is missing, unreadable or structurally invalid is treated as
//! absent: `load_weeks` yields an empty collection and `load_stats` the default
//! record. Nothing was ever successfully written in that case, so there is no
//! user intent to lose. Write failures, on the other hand, always propagate.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a data directory, atomic writes.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{StatsRecord, WordList};

pub mod fs;
pub mod memory;

/// Abstract interface for word list and stats persistence.
///
/// Every mutation serializes the full document.
pub trait DataStore {
    /// Load the full word list collection, in stored order
    fn load_weeks(&self) -> Result<Vec<WordList>>;

    /// Replace the stored collection
    fn save_weeks(&mut self, weeks: &[WordList]) -> Result<()>;

    /// Load the stats document
    fn load_stats(&self) -> Result<StatsRecord>;

    /// Replace the stats document
    fn save_stats(&mut self, stats: &StatsRecord) -> Result<()>;
}
