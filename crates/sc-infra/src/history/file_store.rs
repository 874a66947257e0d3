use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sc_core::ports::HistoryStorePort;
use sc_core::HistoryRecord;
use tracing::debug;

/// JSON-file implementation of [`HistoryStorePort`].
///
/// The file holds a pretty-printed array of `{"text", "sticky"}` objects in
/// registry order.
///
/// 以 JSON 文件保存历史记录。
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create history dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename it over the target, so
    /// readers see either the old or the new registry.
    fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)
            .with_context(|| format!("write temp history failed: {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "rename temp history to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

impl HistoryStorePort for FileHistoryStore {
    fn load(&self) -> Result<Vec<HistoryRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "History file not found");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read history failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse history failed: {}", self.path.display()))
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).context("serialize history failed")?;
        self.atomic_write(&content)?;
        debug!(records = records.len(), "History saved");
        Ok(())
    }
}
