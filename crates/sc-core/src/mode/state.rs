use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// History mode.
///
/// 历史记录模式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryMode {
    /// Browsing; clicking an entry restores it to the clipboard.
    ///
    /// 浏览模式，点击条目即恢复到剪贴板。
    Normal,
    /// No entries; the indicator is hidden.
    ///
    /// 无条目，隐藏指示器。
    Empty,
    /// Bulk-clear selection; clicking an entry toggles its deletion mark.
    ///
    /// 批量清除选择，点击条目切换删除标记。
    ClearSelect,
    /// An entry is being dragged.
    ///
    /// 正在拖拽条目。
    Dragging {
        entry: EntryId,
        hover: Option<DropZone>,
    },
}

impl HistoryMode {
    pub fn name(&self) -> &'static str {
        match self {
            HistoryMode::Normal => "normal",
            HistoryMode::Empty => "empty",
            HistoryMode::ClearSelect => "clear_select",
            HistoryMode::Dragging { .. } => "dragging",
        }
    }
}

impl std::fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Drop targets a dragged entry can hover over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropZone {
    DeleteZone,
    StickyZone,
}
