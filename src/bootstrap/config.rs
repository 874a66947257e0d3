//! # Configuration resolution / 配置解析
//!
//! Turns CLI flags plus the config file into the concrete values the daemon
//! runs with. Parsing lives in `sc-core`, file reading in `sc-infra`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use sc_core::app_dirs::AppDirs;
use sc_core::AppConfig;
use sc_infra::load_config;

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: AppConfig,
    pub registry_path: PathBuf,
}

/// Load the config file and apply command-line overrides.
///
/// `config_path` falls back to `<config_dir>/stickclip/config.toml`; the
/// registry falls back to `<data_dir>/stickclip/registry.json`.
pub fn resolve_config(
    app_dirs: &AppDirs,
    config_path: Option<PathBuf>,
    interval_ms: Option<u64>,
) -> Result<ResolvedConfig> {
    let config_path = config_path.unwrap_or_else(|| app_dirs.config_path());
    let mut config = load_config(&config_path)?;

    if let Some(interval_ms) = interval_ms {
        config.poller.interval_ms = interval_ms;
    }
    config
        .validate()
        .with_context(|| format!("invalid config: {}", config_path.display()))?;

    let registry_path = config
        .storage
        .registry_path
        .clone()
        .unwrap_or_else(|| app_dirs.registry_path());

    Ok(ResolvedConfig {
        config,
        registry_path,
    })
}
