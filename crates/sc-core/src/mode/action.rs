use serde::{Deserialize, Serialize};

/// Side-effects produced when a mode is exited or entered.
///
/// 模式退出或进入时产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryAction {
    /// Re-select the recorded selection, or the latest entry; emit `ListEmptied` if there is none.
    ///
    /// 重新选中当前条目或最新条目；若无条目则触发 `ListEmptied`。
    ResolveSelection,
    /// Drop selection ornaments and clear-mode marks. The selected entry stays selected.
    ///
    /// 清除选择装饰与删除标记，不取消条目本身的选中状态。
    ClearSelectionOrnaments,
    /// Set the live clipboard text to empty.
    ///
    /// 清空系统剪贴板文本。
    ClearClipboard,
    /// Show or hide the indicator.
    ///
    /// 显示或隐藏指示器。
    SetIndicatorVisible(bool),
    /// Remove every entry checked for deletion.
    ///
    /// 删除所有被标记的条目。
    RemoveMarkedEntries,
    /// Start following drag motion for drop-target hover feedback.
    ///
    /// 开始跟踪拖拽位置以提供悬停反馈。
    TrackDragMotion,
    /// Re-run eviction, persist and clear hover feedback.
    ///
    /// 重新执行淘汰、持久化并清除悬停反馈。
    FinishDrag,
}
