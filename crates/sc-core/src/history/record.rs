use serde::{Deserialize, Serialize};

/// Persisted form of a history entry.
///
/// 历史条目的持久化形式。
///
/// Only the text and the sticky flag survive a restart; selection and
/// clear-mode marks are runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub text: String,
    #[serde(default)]
    pub sticky: bool,
}

impl HistoryRecord {
    pub fn new(text: impl Into<String>, sticky: bool) -> Self {
        Self {
            text: text.into(),
            sticky,
        }
    }
}
