use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identity of a history entry for the lifetime of the process.
///
/// Ids are never persisted; entries loaded from disk receive fresh ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl_id!(EntryId);
