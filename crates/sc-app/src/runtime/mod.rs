mod command;
mod error;
mod handle;
mod runtime;

pub use command::{HistoryCommand, HistoryCommandReceiver, HistoryCommandSender};
pub use error::HistoryRuntimeError;
pub use handle::HistoryRuntimeHandle;
pub use runtime::HistoryRuntime;
