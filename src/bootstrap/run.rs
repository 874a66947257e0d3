use std::io::Write;

use anyhow::{Context, Result};
use sc_app::HistoryRuntime;
use sc_core::ports::HistoryStorePort;
use sc_core::Registry;
use sc_infra::FileHistoryStore;
use tracing::info;

use super::config::ResolvedConfig;
use super::wiring::build_history_deps;

/// Run the history daemon until Ctrl-C.
pub async fn run_daemon(resolved: ResolvedConfig) -> Result<()> {
    let ResolvedConfig {
        config,
        registry_path,
    } = resolved;

    info!(
        registry = %registry_path.display(),
        max_entries = config.history.max_entries,
        interval_ms = config.poller.interval_ms,
        "Starting stickclip"
    );

    let deps = build_history_deps(&registry_path, config.history.preview_chars)?;
    let handle = HistoryRuntime::spawn(deps, config.history.max_entries, config.poller.interval());

    tokio::signal::ctrl_c()
        .await
        .context("listen for ctrl-c failed")?;
    info!("Received Ctrl-C");

    let history = handle.shutdown().await?;
    info!(entries = history.registry().len(), "stickclip stopped");
    Ok(())
}

/// Print the saved history: index, `*` for sticky entries, preview.
pub fn list_history(resolved: &ResolvedConfig) -> Result<()> {
    let store = FileHistoryStore::new(&resolved.registry_path);
    let registry = Registry::from_records(store.load()?, resolved.config.history.max_entries);

    let mut out = std::io::stdout().lock();
    write_listing(&mut out, &registry, resolved.config.history.preview_chars)?;
    Ok(())
}

fn write_listing(out: &mut impl Write, registry: &Registry, preview_chars: usize) -> Result<()> {
    for (index, entry) in registry.entries().enumerate() {
        let marker = if entry.is_sticky() { '*' } else { ' ' };
        let preview = entry.preview(preview_chars).replace('\n', " ");
        writeln!(out, "{index:>2} {marker} {preview}")?;
    }
    Ok(())
}
