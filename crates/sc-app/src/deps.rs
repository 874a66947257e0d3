//! Port bundle handed to the history aggregate at construction.

use std::sync::Arc;

use sc_core::ports::{HistoryNotifierPort, HistoryStorePort, SystemClipboardPort};

#[derive(Clone)]
pub struct HistoryDeps {
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub store: Arc<dyn HistoryStorePort>,
    pub notifier: Arc<dyn HistoryNotifierPort>,
}
