use anyhow::Result;

use crate::history::HistoryRecord;

/// Durable storage for the history.
///
/// `save` receives records in registry iteration order and `load` must return
/// them in the same order. Saves happen synchronously with every mutation.
pub trait HistoryStorePort: Send + Sync {
    fn load(&self) -> Result<Vec<HistoryRecord>>;
    fn save(&self, records: &[HistoryRecord]) -> Result<()>;
}
