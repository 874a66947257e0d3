mod service;
mod snapshot;

pub use service::{ClipboardHistory, ClipboardWrite};
pub use snapshot::{EntrySnapshot, HistorySnapshot};
