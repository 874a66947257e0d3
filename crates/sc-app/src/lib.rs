//! stickclip Application Orchestration Layer
//!
//! This crate owns the clipboard history aggregate and the runtime that feeds
//! it clipboard polls and UI commands.
//!
//! ```text
//! Poller tick ──► SystemClipboardPort::read_text
//!                          │
//! UI command ──┐           ▼
//!              └──► ClipboardHistory ──► Registry mutation
//!                          │                    │
//!                          ▼                    ▼
//!                 HistoryStateMachine    HistoryStorePort::save
//!                                               │
//!                                               ▼
//!                                   HistoryNotifierPort::notify
//! ```

pub mod adapters;
pub mod deps;
pub mod history;
pub mod runtime;

pub use deps::HistoryDeps;
pub use history::{ClipboardHistory, ClipboardWrite, EntrySnapshot, HistorySnapshot};
pub use runtime::{HistoryCommand, HistoryRuntime, HistoryRuntimeError, HistoryRuntimeHandle};
