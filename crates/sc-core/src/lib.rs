//! # sc-core
//!
//! Core domain models and business logic for stickclip.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the history registry, the mode state machine and the ports the outer layers implement.

pub mod app_dirs;
pub mod config;
pub mod history;
pub mod ids;
pub mod mode;
pub mod notification;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use history::{HistoryEntry, HistoryRecord, Registry, MAX_REGISTRY_LENGTH};
pub use ids::EntryId;
pub use mode::{DropZone, HistoryAction, HistoryEvent, HistoryMode, HistoryStateMachine, Transition};
pub use notification::HistoryNotification;
