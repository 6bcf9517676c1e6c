use super::DataStore;
use crate::error::{Result, WordlyError};
use crate::model::{StatsRecord, WordList};

/// In-memory storage for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    weeks: Vec<WordList>,
    stats: StatsRecord,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing collection.
    pub fn with_weeks(weeks: Vec<WordList>) -> Self {
        Self {
            weeks,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(WordlyError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_weeks(&self) -> Result<Vec<WordList>> {
        Ok(self.weeks.clone())
    }

    fn save_weeks(&mut self, weeks: &[WordList]) -> Result<()> {
        self.check_write()?;
        self.weeks = weeks.to_vec();
        Ok(())
    }

    fn load_stats(&self) -> Result<StatsRecord> {
        Ok(self.stats.clone())
    }

    fn save_stats(&mut self, stats: &StatsRecord) -> Result<()> {
        self.check_write()?;
        self.stats = stats.clone();
        Ok(())
    }
}
