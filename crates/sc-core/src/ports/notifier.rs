use crate::notification::HistoryNotification;

/// Outbound notification surface (entry added/removed/selected, mode changes, hover).
///
/// Implementations must not call back into the history; they run inside a mutation.
pub trait HistoryNotifierPort: Send + Sync {
    fn notify(&self, notification: HistoryNotification);
}
