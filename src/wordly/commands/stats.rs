use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{LastScore, StatsRecord};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(store.load_stats()?))
}

/// Overwrites the stats document with `score`; no history is kept.
pub fn record<S: DataStore>(store: &mut S, score: LastScore) -> Result<()> {
    store.save_stats(&StatsRecord {
        last_score: Some(score),
    })?;
    tracing::info!(total = score.total, correct = score.correct, "recorded quiz score");
    Ok(())
}
