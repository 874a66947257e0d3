//! Clipboard history aggregate.
//!
//! `ClipboardHistory` owns the registry and the current mode and is the only
//! place where state machine actions meet the ports. Every mutation follows
//! the same order: mutate, evict overflow, persist, notify.

use tracing::{debug, info, warn};

use sc_core::{
    DropZone, EntryId, HistoryAction, HistoryEntry, HistoryEvent, HistoryMode,
    HistoryNotification, HistoryStateMachine, Registry, Transition,
};

use crate::deps::HistoryDeps;
use crate::history::HistorySnapshot;

/// Whether selecting an entry also writes its text to the live clipboard.
///
/// 选中条目时是否同时写入系统剪贴板。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardWrite {
    /// The registry is the source of truth (a user click).
    Write,
    /// The clipboard is the source of truth (an external copy seen by a poll).
    Suppress,
}

pub struct ClipboardHistory {
    registry: Registry,
    mode: HistoryMode,
    deps: HistoryDeps,
    write_generation: u64,
}

impl ClipboardHistory {
    /// Load the persisted history and settle the initial mode.
    ///
    /// A store that fails to load is treated as an empty history. The live
    /// clipboard is never written during startup. A zero `capacity` is raised
    /// to one, otherwise every copy would be evicted on arrival.
    ///
    /// 加载持久化的历史记录并确定初始模式。
    #[tracing::instrument(name = "history.start", skip(deps))]
    pub fn start(deps: HistoryDeps, capacity: usize) -> Self {
        let records = match deps.store.load() {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Failed to load clipboard history, starting empty");
                Vec::new()
            }
        };

        if capacity == 0 {
            warn!("History capacity of 0 is unusable, keeping 1 entry");
        }
        let registry = Registry::from_records(records, capacity.max(1));
        let mut history = Self {
            registry,
            mode: HistoryMode::Normal,
            deps,
            write_generation: 0,
        };

        match history.registry.latest().map(|entry| entry.id().clone()) {
            Some(latest) => {
                history.select(&latest, ClipboardWrite::Suppress);
            }
            None => {
                history.mode = HistoryMode::Empty;
                history.notify(HistoryNotification::IndicatorVisibility(false));
            }
        }

        info!(
            entries = history.registry.len(),
            sticky = history.registry.sticky_len(),
            mode = %history.mode,
            "Clipboard history started"
        );
        history
    }

    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::capture(&self.mode, &self.registry)
    }

    /// Number of clipboard writes issued so far.
    ///
    /// A clipboard read that started under an older generation may return
    /// text this history has since replaced, and must be discarded.
    pub fn write_generation(&self) -> u64 {
        self.write_generation
    }

    pub fn find_by_text(&self, text: &str) -> Option<&HistoryEntry> {
        self.registry.find_by_text(text)
    }

    /// Append a new entry, evicting the oldest non-sticky overflow.
    ///
    /// Empty or already-present text is ignored and returns `None`.
    pub fn insert(&mut self, text: impl Into<String>, sticky: bool) -> Option<EntryId> {
        let text = text.into();
        let Some(id) = self.registry.insert(text.clone(), sticky) else {
            debug!("Ignoring empty or duplicate history text");
            return None;
        };

        let evicted = self.registry.evict_overflow();
        self.persist();

        debug!(entry_id = %id, sticky, "History entry added");
        self.notify(HistoryNotification::EntryAdded {
            id: id.clone(),
            text,
            sticky,
        });
        self.notify_evicted(evicted);
        Some(id)
    }

    /// Remove an entry.
    ///
    /// Removing the selected entry clears the live clipboard, so the next poll
    /// does not bring the deleted text straight back.
    pub fn remove(&mut self, id: &EntryId) -> Option<HistoryEntry> {
        let was_selected = self
            .registry
            .selected()
            .is_some_and(|entry| entry.id() == id);

        let Some(entry) = self.registry.remove(id) else {
            debug!(entry_id = %id, "Ignoring removal of unknown entry");
            return None;
        };
        self.persist();

        debug!(entry_id = %id, was_selected, "History entry removed");
        self.notify(HistoryNotification::EntryRemoved { id: id.clone() });

        if was_selected {
            self.write_clipboard("");
        }
        if self.registry.is_empty() {
            self.dispatch(HistoryEvent::ListEmptied);
        }
        Some(entry)
    }

    /// Move an entry into or out of the sticky group.
    pub fn set_sticky(&mut self, id: &EntryId, sticky: bool) -> bool {
        if !self.registry.set_sticky(id, sticky) {
            debug!(entry_id = %id, sticky, "Sticky flag unchanged");
            return false;
        }

        let evicted = self.registry.evict_overflow();
        self.persist();

        debug!(entry_id = %id, sticky, "History entry sticky flag changed");
        self.notify(HistoryNotification::EntryStickyChanged {
            id: id.clone(),
            sticky,
        });
        self.notify_evicted(evicted);
        true
    }

    /// Select an entry, optionally pushing its text to the live clipboard.
    pub fn select(&mut self, id: &EntryId, write: ClipboardWrite) -> bool {
        let Some(text) = self.registry.get(id).map(|entry| entry.text().to_string()) else {
            debug!(entry_id = %id, "Ignoring selection of unknown entry");
            return false;
        };

        self.registry.select(id);
        self.notify(HistoryNotification::EntrySelected { id: id.clone() });

        if write == ClipboardWrite::Write {
            self.write_clipboard(&text);
        }
        true
    }

    /// Reconcile one clipboard poll result with the history.
    pub fn on_clipboard_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if let Some(entry) = self.registry.find_by_text(text) {
            if entry.is_selected() {
                return;
            }
            let id = entry.id().clone();
            debug!(entry_id = %id, "Clipboard matches existing entry");
            self.select(&id, ClipboardWrite::Suppress);
            return;
        }

        if let Some(id) = self.insert(text, false) {
            self.select(&id, ClipboardWrite::Suppress);
            self.dispatch(HistoryEvent::ItemAdded);
        }
    }

    /// A click on an entry: restore it in normal mode, toggle its mark in clear mode.
    pub fn click_entry(&mut self, id: &EntryId) {
        match self.mode {
            HistoryMode::Normal => {
                self.select(id, ClipboardWrite::Write);
            }
            HistoryMode::ClearSelect => {
                if let Some(marked) = self.registry.toggle_mark(id) {
                    self.notify(HistoryNotification::EntryMarkChanged {
                        id: id.clone(),
                        marked,
                    });
                }
            }
            _ => debug!(entry_id = %id, mode = %self.mode, "Ignoring click"),
        }
    }

    pub fn toggle_clear_mode(&mut self, enabled: bool) {
        let event = if enabled {
            HistoryEvent::EnterClearMode
        } else {
            HistoryEvent::ExitClearMode
        };
        self.dispatch(event);
    }

    pub fn drag_start(&mut self, id: &EntryId) {
        if self.registry.get(id).is_none() {
            debug!(entry_id = %id, "Ignoring drag of unknown entry");
            return;
        }
        self.dispatch(HistoryEvent::ItemDragStart { entry: id.clone() });
    }

    /// Track which drop target the dragged entry hovers over.
    pub fn drag_motion(&mut self, zone: Option<DropZone>) {
        let HistoryMode::Dragging { hover, .. } = &mut self.mode else {
            return;
        };

        let was_delete = *hover == Some(DropZone::DeleteZone);
        *hover = zone;
        let is_delete = zone == Some(DropZone::DeleteZone);

        if was_delete != is_delete {
            self.notify(HistoryNotification::DeleteTargetHover(is_delete));
        }
    }

    pub fn drag_end(&mut self) {
        self.dispatch(HistoryEvent::ItemDragEnd);
    }

    pub fn drop_on_delete_zone(&mut self, id: &EntryId) {
        if !self.is_dragging() {
            debug!(entry_id = %id, "Ignoring drop outside a drag");
            return;
        }
        self.remove(id);
    }

    /// Dropping on the sticky target flips the entry's sticky flag.
    pub fn drop_on_sticky_zone(&mut self, id: &EntryId) {
        if !self.is_dragging() {
            debug!(entry_id = %id, "Ignoring drop outside a drag");
            return;
        }
        let Some(sticky) = self.registry.get(id).map(HistoryEntry::is_sticky) else {
            return;
        };
        self.set_sticky(id, !sticky);
    }

    /// Feed an event to the state machine and run the resulting actions.
    ///
    /// Exit actions of the old mode run before the mode changes and enter
    /// actions of the new mode run after it. Returns `false` when the current
    /// mode ignores the event.
    ///
    /// 先执行旧模式的退出动作，再切换模式，最后执行新模式的进入动作。
    pub fn dispatch(&mut self, event: HistoryEvent) -> bool {
        let Some(Transition { exit, next, enter }) =
            HistoryStateMachine::transition(&self.mode, &event)
        else {
            debug!(mode = %self.mode, ?event, "Event ignored in current mode");
            return false;
        };

        for action in exit {
            self.run_action(action);
        }

        info!(from = %self.mode, to = %next, "History mode transition");
        self.mode = next;
        self.notify(HistoryNotification::ModeChanged {
            mode: self.mode.clone(),
        });

        for action in enter {
            self.run_action(action);
        }
        true
    }

    fn run_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::ResolveSelection => self.resolve_selection(),
            HistoryAction::ClearSelectionOrnaments => {
                self.registry.clear_marks();
                self.notify(HistoryNotification::OrnamentsCleared);
            }
            HistoryAction::ClearClipboard => self.write_clipboard(""),
            HistoryAction::SetIndicatorVisible(visible) => {
                self.notify(HistoryNotification::IndicatorVisibility(visible));
            }
            HistoryAction::RemoveMarkedEntries => {
                for id in self.registry.marked_ids() {
                    self.remove(&id);
                }
            }
            HistoryAction::TrackDragMotion => {
                if let HistoryMode::Dragging { hover, .. } = &mut self.mode {
                    *hover = None;
                }
            }
            HistoryAction::FinishDrag => self.finish_drag(),
        }
    }

    fn resolve_selection(&mut self) {
        let target = self
            .registry
            .selected()
            .or_else(|| self.registry.latest())
            .map(|entry| entry.id().clone());

        match target {
            Some(id) => {
                self.select(&id, ClipboardWrite::Write);
            }
            None => {
                self.dispatch(HistoryEvent::ListEmptied);
            }
        }
    }

    fn finish_drag(&mut self) {
        let evicted = self.registry.evict_overflow();
        self.persist();
        self.notify_evicted(evicted);

        if let HistoryMode::Dragging { hover, .. } = &mut self.mode {
            let was_delete = hover.take() == Some(DropZone::DeleteZone);
            if was_delete {
                self.notify(HistoryNotification::DeleteTargetHover(false));
            }
        }
    }

    fn is_dragging(&self) -> bool {
        matches!(self.mode, HistoryMode::Dragging { .. })
    }

    /// Persist the current records; failures are logged and swallowed.
    pub fn persist(&self) {
        if let Err(err) = self.deps.store.save(&self.registry.records()) {
            warn!(error = %err, "Failed to persist clipboard history");
        }
    }

    /// Final persist before the aggregate is dropped.
    pub fn flush(&self) {
        info!(entries = self.registry.len(), "Flushing clipboard history");
        self.persist();
    }

    fn write_clipboard(&mut self, text: &str) {
        self.write_generation += 1;
        if let Err(err) = self.deps.clipboard.write_text(text) {
            warn!(error = %err, "Failed to write system clipboard");
        }
    }

    fn notify(&self, notification: HistoryNotification) {
        self.deps.notifier.notify(notification);
    }

    fn notify_evicted(&self, evicted: Vec<HistoryEntry>) {
        for entry in evicted {
            debug!(entry_id = %entry.id(), "History entry evicted");
            self.notify(HistoryNotification::EntryRemoved {
                id: entry.id().clone(),
            });
        }
    }
}
