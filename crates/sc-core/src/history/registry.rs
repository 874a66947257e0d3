//! Bounded, ordered clipboard history.
//!
//! ## Invariants / 不变量
//!
//! - Non-sticky entries never exceed `capacity`; the oldest non-sticky entry is evicted first.
//! - Sticky entries are never evicted and do not count towards `capacity`.
//! - At most one entry is selected.
//! - No two entries share the same text.
//!
//! Entries live in two groups, sticky and main, each ordered oldest first.
//! Iteration yields the sticky group followed by the main group, and that is
//! also the order in which records are persisted.

use crate::history::{HistoryEntry, HistoryRecord};
use crate::ids::EntryId;

/// Default number of non-sticky entries kept in the history.
pub const MAX_REGISTRY_LENGTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Sticky,
    Main,
}

#[derive(Debug, Clone)]
pub struct Registry {
    sticky: Vec<HistoryEntry>,
    main: Vec<HistoryEntry>,
    capacity: usize,
    selected: Option<EntryId>,
    next_seq: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(MAX_REGISTRY_LENGTH)
    }
}

impl Registry {
    pub fn new(capacity: usize) -> Self {
        Self {
            sticky: Vec::new(),
            main: Vec::new(),
            capacity,
            selected: None,
            next_seq: 0,
        }
    }

    /// Rebuild a registry from persisted records, in order.
    ///
    /// Empty and duplicate texts are dropped and overflow is evicted, so a
    /// hand-edited file can never break the invariants.
    pub fn from_records(records: impl IntoIterator<Item = HistoryRecord>, capacity: usize) -> Self {
        let mut registry = Self::new(capacity);
        for record in records {
            if registry.insert(record.text, record.sticky).is_none() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Dropping empty or duplicate history record");
            }
        }
        registry.evict_overflow();
        registry
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a new entry at the tail of its group.
    ///
    /// Returns `None` without touching the registry when `text` is empty or
    /// already present. Eviction is left to the caller.
    pub fn insert(&mut self, text: impl Into<String>, sticky: bool) -> Option<EntryId> {
        let text = text.into();
        if text.is_empty() || self.find_by_text(&text).is_some() {
            return None;
        }

        let entry = HistoryEntry::new(text, sticky, self.next_seq);
        self.next_seq += 1;
        let id = entry.id.clone();
        self.group_mut(if sticky { Group::Sticky } else { Group::Main })
            .push(entry);
        Some(id)
    }

    /// Remove an entry from whichever group holds it.
    ///
    /// Removing the selected entry clears the selection; nothing is selected in its place.
    pub fn remove(&mut self, id: &EntryId) -> Option<HistoryEntry> {
        let (group, index) = self.position(id)?;
        let entry = self.group_mut(group).remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Some(entry)
    }

    /// Drop the oldest non-sticky entries until the main group fits `capacity`.
    pub fn evict_overflow(&mut self) -> Vec<HistoryEntry> {
        let overflow = self.main.len().saturating_sub(self.capacity);
        let evicted: Vec<HistoryEntry> = self.main.drain(..overflow).collect();
        if evicted
            .iter()
            .any(|entry| self.selected.as_ref() == Some(&entry.id))
        {
            self.selected = None;
        }
        evicted
    }

    /// Move an entry to the tail of the sticky or main group.
    ///
    /// Returns `false` if the entry is unknown or already in the requested group.
    pub fn set_sticky(&mut self, id: &EntryId, sticky: bool) -> bool {
        let Some((group, index)) = self.position(id) else {
            return false;
        };
        if (group == Group::Sticky) == sticky {
            return false;
        }

        let mut entry = self.group_mut(group).remove(index);
        entry.sticky = sticky;
        let target = if sticky { Group::Sticky } else { Group::Main };
        self.group_mut(target).push(entry);
        true
    }

    /// Select an entry and deselect every other one.
    ///
    /// Returns `false` if the entry is unknown.
    pub fn select(&mut self, id: &EntryId) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        for entry in self.sticky.iter_mut().chain(self.main.iter_mut()) {
            entry.selected = entry.id == *id;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        for entry in self.sticky.iter_mut().chain(self.main.iter_mut()) {
            entry.selected = false;
        }
        self.selected = None;
    }

    /// First entry holding exactly `text`, in iteration order.
    pub fn find_by_text(&self, text: &str) -> Option<&HistoryEntry> {
        self.entries().find(|entry| entry.text == text)
    }

    pub fn get(&self, id: &EntryId) -> Option<&HistoryEntry> {
        self.entries().find(|entry| entry.id == *id)
    }

    pub fn selected(&self) -> Option<&HistoryEntry> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// The most recently added entry across both groups.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries().max_by_key(|entry| entry.seq)
    }

    /// Flip the clear-mode mark of an entry, returning the new mark.
    pub fn toggle_mark(&mut self, id: &EntryId) -> Option<bool> {
        let (group, index) = self.position(id)?;
        let entry = &mut self.group_mut(group)[index];
        entry.marked = !entry.marked;
        Some(entry.marked)
    }

    pub fn marked_ids(&self) -> Vec<EntryId> {
        self.entries()
            .filter(|entry| entry.marked)
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Clear every clear-mode mark. Returns `true` if any mark was set.
    pub fn clear_marks(&mut self) -> bool {
        let mut cleared = false;
        for entry in self.sticky.iter_mut().chain(self.main.iter_mut()) {
            cleared |= entry.marked;
            entry.marked = false;
        }
        cleared
    }

    /// Entries in persistence order: sticky group first, each group oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.sticky.iter().chain(self.main.iter())
    }

    pub fn records(&self) -> Vec<HistoryRecord> {
        self.entries().map(HistoryEntry::to_record).collect()
    }

    pub fn len(&self) -> usize {
        self.sticky.len() + self.main.len()
    }

    pub fn non_sticky_len(&self) -> usize {
        self.main.len()
    }

    pub fn sticky_len(&self) -> usize {
        self.sticky.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sticky.is_empty() && self.main.is_empty()
    }

    fn position(&self, id: &EntryId) -> Option<(Group, usize)> {
        if let Some(index) = self.sticky.iter().position(|entry| entry.id == *id) {
            return Some((Group::Sticky, index));
        }
        self.main
            .iter()
            .position(|entry| entry.id == *id)
            .map(|index| (Group::Main, index))
    }

    fn group_mut(&mut self, group: Group) -> &mut Vec<HistoryEntry> {
        match group {
            Group::Sticky => &mut self.sticky,
            Group::Main => &mut self.main,
        }
    }
}
