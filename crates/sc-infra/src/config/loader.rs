//! Configuration loader.
//!
//! Reads the TOML file from disk and hands the text to [`AppConfig::from_toml`];
//! parsing and defaults live in `sc-core`.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use sc_core::AppConfig;
use tracing::debug;

/// Load the configuration file at `path`.
///
/// A missing file yields the defaults. Read and parse failures are errors.
///
/// 加载配置文件；文件不存在时返回默认配置。
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("read config failed: {}", path.display()));
        }
    };

    AppConfig::from_toml(&content)
        .with_context(|| format!("parse config failed: {}", path.display()))
}
