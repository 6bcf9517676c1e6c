use super::DataStore;
use crate::error::{Result, WordlyError};
use crate::model::{StatsRecord, WordList};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const WEEKS_FILENAME: &str = "weeks.json";
const STATS_FILENAME: &str = "stats.json";

/// File-based storage rooted at a single data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WordlyError::Io)?;
        }
        Ok(())
    }

    /// Reads a document, treating any failure as "absent".
    fn read_document<T: DeserializeOwned + Default>(&self, filename: &str) -> T {
        let path = self.root.join(filename);
        if !path.exists() {
            return T::default();
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unreadable document, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "invalid document, using default");
                T::default()
            }
        }
    }

    fn write_document<T: Serialize + ?Sized>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string(value).map_err(WordlyError::Serialization)?;

        // Atomic write
        let target = self.root.join(filename);
        let tmp = self.root.join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(WordlyError::Io)?;
        fs::rename(&tmp, &target).map_err(WordlyError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_weeks(&self) -> Result<Vec<WordList>> {
        Ok(self.read_document(WEEKS_FILENAME))
    }

    fn save_weeks(&mut self, weeks: &[WordList]) -> Result<()> {
        self.write_document(WEEKS_FILENAME, weeks)?;
        tracing::debug!(count = weeks.len(), "saved weeks");
        Ok(())
    }

    fn load_stats(&self) -> Result<StatsRecord> {
        Ok(self.read_document(STATS_FILENAME))
    }

    fn save_stats(&mut self, stats: &StatsRecord) -> Result<()> {
        self.write_document(STATS_FILENAME, stats)
    }
}
