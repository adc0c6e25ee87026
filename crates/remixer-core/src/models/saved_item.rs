use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A persisted row in the saved-items table.
///
/// `id` and `created_at` are assigned by the server on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedItem {
    pub id: String,
    pub content: String,
    pub created_at: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Insert payload for a new saved item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedItem {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl NewSavedItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            user_id: None,
        }
    }
}

/// Sort newest first. Stable, so rows sharing a timestamp keep their order.
pub fn sort_newest_first(items: &mut [SavedItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
