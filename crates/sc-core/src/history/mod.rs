//! Clipboard history domain: entries, persisted records and the bounded registry.

mod entry;
mod record;
mod registry;

pub use entry::{preview_text, HistoryEntry};
pub use record::HistoryRecord;
pub use registry::{Registry, MAX_REGISTRY_LENGTH};
