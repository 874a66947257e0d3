//! Outbound notifications for whatever renders the history.
//!
//! Notifications describe facts only. The core never touches presentation
//! state; a UI, a log sink or a test fake decides what to do with them.

use serde::{Deserialize, Serialize};

use crate::ids::EntryId;
use crate::mode::HistoryMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryNotification {
    /// A new entry joined the history.
    EntryAdded { id: EntryId, text: String, sticky: bool },
    /// An entry left the history (removed, cleared or evicted).
    EntryRemoved { id: EntryId },
    /// An entry became the selected one.
    EntrySelected { id: EntryId },
    /// An entry moved between the sticky and main groups.
    EntryStickyChanged { id: EntryId, sticky: bool },
    /// An entry was checked or unchecked in clear mode.
    EntryMarkChanged { id: EntryId, marked: bool },
    /// The mode changed.
    ModeChanged { mode: HistoryMode },
    /// Selection ornaments and clear-mode marks were reset.
    OrnamentsCleared,
    /// The indicator should be shown or hidden.
    IndicatorVisibility(bool),
    /// The dragged entry entered or left the delete target.
    DeleteTargetHover(bool),
}
