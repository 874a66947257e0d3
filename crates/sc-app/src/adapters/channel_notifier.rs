use tokio::sync::mpsc;
use tracing::debug;

use sc_core::ports::HistoryNotifierPort;
use sc_core::HistoryNotification;

/// Forwards notifications to a UI task over an unbounded channel.
///
/// 通过无界通道将通知转发给界面任务。
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<HistoryNotification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HistoryNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl HistoryNotifierPort for ChannelNotifier {
    fn notify(&self, notification: HistoryNotification) {
        if let Err(err) = self.tx.send(notification) {
            debug!(notification = ?err.0, "Notification receiver dropped");
        }
    }
}
