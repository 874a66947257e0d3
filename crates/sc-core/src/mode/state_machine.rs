//! History mode state machine.
//!
//! Defines a pure transition table for the history modes. The caller runs
//! `exit` actions, then stores `next`, then runs `enter` actions; exit
//! actions may depend on per-entry flags accumulated in the old mode, so that
//! order must hold.

use super::{HistoryAction, HistoryEvent, HistoryMode};

/// Result of an accepted event.
///
/// 被接受事件的迁移结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub exit: Vec<HistoryAction>,
    pub next: HistoryMode,
    pub enter: Vec<HistoryAction>,
}

/// Pure history state machine.
///
/// 纯状态机：不包含副作用。
pub struct HistoryStateMachine;

impl HistoryStateMachine {
    /// Look up `(mode, event)` in the transition table.
    ///
    /// Returns `None` when the current mode does not handle the event; such
    /// events are expected races between the UI and the poller and are ignored.
    pub fn transition(mode: &HistoryMode, event: &HistoryEvent) -> Option<Transition> {
        let next = match (mode, event) {
            (HistoryMode::Normal, HistoryEvent::ListEmptied) => HistoryMode::Empty,
            (HistoryMode::Normal, HistoryEvent::EnterClearMode) => HistoryMode::ClearSelect,
            (HistoryMode::Normal, HistoryEvent::ItemDragStart { entry }) => HistoryMode::Dragging {
                entry: entry.clone(),
                hover: None,
            },
            (HistoryMode::Empty, HistoryEvent::ItemAdded) => HistoryMode::Normal,
            (HistoryMode::ClearSelect, HistoryEvent::ExitClearMode) => HistoryMode::Normal,
            (HistoryMode::Dragging { .. }, HistoryEvent::ItemDragEnd) => HistoryMode::Normal,
            _ => return None,
        };

        Some(Transition {
            exit: Self::exit_actions(mode),
            enter: Self::enter_actions(&next),
            next,
        })
    }

    pub fn enter_actions(mode: &HistoryMode) -> Vec<HistoryAction> {
        match mode {
            HistoryMode::Normal => vec![HistoryAction::ResolveSelection],
            HistoryMode::Empty => vec![
                HistoryAction::ClearClipboard,
                HistoryAction::SetIndicatorVisible(false),
            ],
            HistoryMode::ClearSelect => Vec::new(),
            HistoryMode::Dragging { .. } => vec![HistoryAction::TrackDragMotion],
        }
    }

    pub fn exit_actions(mode: &HistoryMode) -> Vec<HistoryAction> {
        match mode {
            HistoryMode::Normal => vec![HistoryAction::ClearSelectionOrnaments],
            HistoryMode::Empty => vec![HistoryAction::SetIndicatorVisible(true)],
            HistoryMode::ClearSelect => vec![HistoryAction::RemoveMarkedEntries],
            HistoryMode::Dragging { .. } => vec![HistoryAction::FinishDrag],
        }
    }
}
