use serde::Serialize;

use sc_core::{EntryId, HistoryEntry, HistoryMode, Registry};

/// Read-only view of the history for a UI or a CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySnapshot {
    pub mode: HistoryMode,
    pub entries: Vec<EntrySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySnapshot {
    pub id: EntryId,
    pub text: String,
    pub sticky: bool,
    pub selected: bool,
    pub marked: bool,
}

impl From<&HistoryEntry> for EntrySnapshot {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id().clone(),
            text: entry.text().to_string(),
            sticky: entry.is_sticky(),
            selected: entry.is_selected(),
            marked: entry.is_marked(),
        }
    }
}

impl HistorySnapshot {
    pub fn capture(mode: &HistoryMode, registry: &Registry) -> Self {
        Self {
            mode: mode.clone(),
            entries: registry.entries().map(EntrySnapshot::from).collect(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.text.as_str()).collect()
    }

    pub fn selected(&self) -> Option<&EntrySnapshot> {
        self.entries.iter().find(|entry| entry.selected)
    }
}
