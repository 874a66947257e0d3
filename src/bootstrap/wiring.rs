//! # Dependency wiring / 依赖注入
//!
//! The only place that depends on `sc-app`, `sc-infra` and `sc-platform`
//! together. It assembles adapters and makes no decisions.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use sc_app::adapters::TracingNotifier;
use sc_app::HistoryDeps;
use sc_infra::FileHistoryStore;
use sc_platform::LocalClipboard;

pub fn build_history_deps(registry_path: &Path, preview_chars: usize) -> Result<HistoryDeps> {
    Ok(HistoryDeps {
        clipboard: Arc::new(LocalClipboard::new()?),
        store: Arc::new(FileHistoryStore::new(registry_path)),
        notifier: Arc::new(TracingNotifier::new(preview_chars)),
    })
}
