use crate::history::HistoryRecord;
use crate::ids::EntryId;

/// One clipboard history record held by the [`Registry`](super::Registry).
///
/// Fields are only mutable through the registry so that the single-selection
/// and unique-text invariants cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) id: EntryId,
    pub(crate) text: String,
    pub(crate) sticky: bool,
    pub(crate) selected: bool,
    pub(crate) marked: bool,
    pub(crate) seq: u64,
}

impl HistoryEntry {
    pub(crate) fn new(text: String, sticky: bool, seq: u64) -> Self {
        Self {
            id: EntryId::new(),
            text,
            sticky,
            selected: false,
            marked: false,
            seq,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the entry is checked for deletion in clear mode.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Display form of the text, cut after `max_chars` characters with a trailing `...`.
    ///
    /// Storage always keeps the full text.
    pub fn preview(&self, max_chars: usize) -> String {
        preview_text(&self.text, max_chars)
    }

    pub fn to_record(&self) -> HistoryRecord {
        HistoryRecord::new(self.text.clone(), self.sticky)
    }
}

/// Cut `text` after `max_chars` characters, appending `...` when anything was dropped.
pub fn preview_text(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
