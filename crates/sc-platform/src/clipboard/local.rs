use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tokio::task::spawn_blocking;
use tracing::trace;

use sc_core::ports::SystemClipboardPort;

/// The desktop clipboard through `clipboard-rs`.
///
/// Only the plain-text flavour is read or written.
///
/// 基于 `clipboard-rs` 的系统剪贴板，仅处理纯文本。
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

fn lock(inner: &Mutex<ClipboardContext>) -> Result<MutexGuard<'_, ClipboardContext>> {
    inner
        .lock()
        .map_err(|_| anyhow!("clipboard context lock poisoned"))
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = map_clipboard_err(ClipboardContext::new())
            .context("ClipboardContext::new failed")?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

#[async_trait]
impl SystemClipboardPort for LocalClipboard {
    async fn read_text(&self) -> Result<String> {
        let inner = self.inner.clone();
        spawn_blocking(move || {
            let ctx = lock(&inner)?;
            if !ctx.has(ContentFormat::Text) {
                return Ok(String::new());
            }
            map_clipboard_err(ctx.get_text())
        })
        .await
        .context("clipboard read task failed")?
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let ctx = lock(&self.inner)?;
        trace!(bytes = text.len(), "Writing system clipboard");
        if text.is_empty() {
            return map_clipboard_err(ctx.clear()).context("clear clipboard failed");
        }
        map_clipboard_err(ctx.set_text(text.to_string())).context("write clipboard text failed")
    }
}
