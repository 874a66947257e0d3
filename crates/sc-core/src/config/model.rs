use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application configuration DTO.
///
/// 应用配置 DTO。Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub poller: PollerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of non-sticky entries.
    pub max_entries: usize,
    /// Characters shown before a preview is cut with `...`.
    pub preview_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides `<data_dir>/stickclip/registry.json`.
    pub registry_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    /// 从 TOML 文本解析配置。
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reject values the history cannot run with.
    ///
    /// A zero capacity would evict every new entry on arrival and a zero
    /// poll period cannot drive a timer.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.history.max_entries == 0 {
            anyhow::bail!("history.max_entries must be at least 1");
        }
        if self.poller.interval_ms == 0 {
            anyhow::bail!("poller.interval_ms must be at least 1");
        }
        Ok(())
    }
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
