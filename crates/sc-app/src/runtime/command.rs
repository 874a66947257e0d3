use tokio::sync::{mpsc, oneshot};

use sc_core::{DropZone, EntryId};

use crate::history::HistorySnapshot;

/// Inbound UI gestures, delivered to the runtime that owns the history.
///
/// 来自界面的输入命令，由持有历史记录的运行时处理。
#[derive(Debug)]
pub enum HistoryCommand {
    ClickEntry(EntryId),
    ToggleClearMode(bool),
    DragStart(EntryId),
    DragMotion(Option<DropZone>),
    DragEnd,
    DropOnDeleteZone(EntryId),
    DropOnStickyZone(EntryId),
    SetSticky { id: EntryId, sticky: bool },
    /// Read-only query; the reply carries the state after every earlier command.
    Snapshot(oneshot::Sender<HistorySnapshot>),
}

pub type HistoryCommandSender = mpsc::Sender<HistoryCommand>;
pub type HistoryCommandReceiver = mpsc::Receiver<HistoryCommand>;
