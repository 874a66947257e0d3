use tracing::info;

use sc_core::history::preview_text;
use sc_core::ports::HistoryNotifierPort;
use sc_core::HistoryNotification;

/// Writes every history notification to the log.
pub struct TracingNotifier {
    preview_chars: usize,
}

impl TracingNotifier {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl HistoryNotifierPort for TracingNotifier {
    fn notify(&self, notification: HistoryNotification) {
        match notification {
            HistoryNotification::EntryAdded { id, text, sticky } => {
                let preview = preview_text(&text, self.preview_chars);
                info!(entry_id = %id, sticky, preview = %preview, "Entry added");
            }
            HistoryNotification::EntryRemoved { id } => info!(entry_id = %id, "Entry removed"),
            HistoryNotification::EntrySelected { id } => info!(entry_id = %id, "Entry selected"),
            HistoryNotification::EntryStickyChanged { id, sticky } => {
                info!(entry_id = %id, sticky, "Entry sticky changed")
            }
            HistoryNotification::EntryMarkChanged { id, marked } => {
                info!(entry_id = %id, marked, "Entry mark changed")
            }
            HistoryNotification::ModeChanged { mode } => info!(mode = %mode, "Mode changed"),
            HistoryNotification::OrnamentsCleared => info!("Selection ornaments cleared"),
            HistoryNotification::IndicatorVisibility(visible) => {
                info!(visible, "Indicator visibility changed")
            }
            HistoryNotification::DeleteTargetHover(hover) => {
                info!(hover, "Delete target hover changed")
            }
        }
    }
}
