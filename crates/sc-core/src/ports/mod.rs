//! Port interfaces for the application layer
//!
//! Ports define the contract between the history logic and infrastructure
//! implementations. This follows Hexagonal Architecture principles, allowing
//! the core business logic to remain independent of external dependencies.

pub mod app_dirs;
pub mod clipboard;
pub mod errors;
pub mod history_store;
pub mod notifier;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use errors::AppDirsError;
pub use history_store::HistoryStorePort;
pub use notifier::HistoryNotifierPort;
