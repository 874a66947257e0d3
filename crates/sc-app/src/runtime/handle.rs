use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::{HistoryCommand, HistoryCommandSender, HistoryRuntimeError};
use crate::history::{ClipboardHistory, HistorySnapshot};

/// Control surface of a running [`HistoryRuntime`](super::HistoryRuntime).
pub struct HistoryRuntimeHandle {
    command_tx: HistoryCommandSender,
    cancel: CancellationToken,
    join: JoinHandle<ClipboardHistory>,
}

impl HistoryRuntimeHandle {
    pub(crate) fn new(
        command_tx: HistoryCommandSender,
        cancel: CancellationToken,
        join: JoinHandle<ClipboardHistory>,
    ) -> Self {
        Self {
            command_tx,
            cancel,
            join,
        }
    }

    pub async fn send(&self, command: HistoryCommand) -> Result<(), HistoryRuntimeError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| HistoryRuntimeError::ChannelClosed)
    }

    pub async fn snapshot(&self) -> Result<HistorySnapshot, HistoryRuntimeError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(HistoryCommand::Snapshot(reply_tx)).await?;
        reply_rx
            .await
            .map_err(|_| HistoryRuntimeError::ChannelClosed)
    }

    /// A sender for UI code that outlives borrows of the handle.
    pub fn commands(&self) -> HistoryCommandSender {
        self.command_tx.clone()
    }

    /// Stop polling, persist once more and hand back the history.
    ///
    /// Consuming the handle makes a second shutdown impossible.
    pub async fn shutdown(self) -> Result<ClipboardHistory, HistoryRuntimeError> {
        info!("Shutting down history runtime");
        self.cancel.cancel();
        let history = self.join.await?;
        Ok(history)
    }
}
