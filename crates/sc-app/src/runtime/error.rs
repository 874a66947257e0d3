#[derive(Debug, thiserror::Error)]
pub enum HistoryRuntimeError {
    #[error("History runtime channel closed")]
    ChannelClosed,

    #[error("History runtime task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
