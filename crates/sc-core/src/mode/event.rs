use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// Events that drive the history mode.
///
/// 驱动历史记录模式的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// The last entry left the registry.
    ///
    /// 最后一个条目被移除。
    ListEmptied,
    /// A new entry was observed on the clipboard.
    ///
    /// 观察到新的剪贴板条目。
    ItemAdded,
    /// User switched clear mode on.
    ///
    /// 用户开启清除模式。
    EnterClearMode,
    /// User switched clear mode off.
    ///
    /// 用户关闭清除模式。
    ExitClearMode,
    /// User started dragging an entry.
    ///
    /// 用户开始拖拽条目。
    ItemDragStart { entry: EntryId },
    /// Drag gesture finished, dropped or not.
    ///
    /// 拖拽结束。
    ItemDragEnd,
}
