use super::model::*;
use crate::history::MAX_REGISTRY_LENGTH;

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_REGISTRY_LENGTH,
            preview_chars: 50,
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            poller: PollerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}
