//! Clipboard port - abstracts system clipboard access
//!
//! Only the primary text buffer is modelled; other payloads are out of scope.

use anyhow::Result;
use async_trait::async_trait;

/// Text access to the live system clipboard.
///
/// 系统剪贴板文本访问端口。
#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// An empty string means the clipboard holds no text. Callers keep at
    /// most one read outstanding.
    async fn read_text(&self) -> Result<String>;

    /// Replace the clipboard text.
    fn write_text(&self, text: &str) -> Result<()>;
}
