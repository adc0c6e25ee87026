use std::sync::Arc;

use remixer_core::models::candidate::{MAX_POST_CHARS, Validity, validate_content};
use remixer_core::models::saved_item::{NewSavedItem, SavedItem, sort_newest_first};
use tracing::{info, warn};

use crate::backend::RowBackend;
use crate::error::StoreError;

/// Create / list / delete over a [`RowBackend`], with delete verification.
#[derive(Clone)]
pub struct SavedItemStore {
    backend: Arc<dyn RowBackend>,
}

impl SavedItemStore {
    pub fn new(backend: Arc<dyn RowBackend>) -> Self {
        Self { backend }
    }

    /// Persist `content` as a new row. One round trip.
    ///
    /// Content over the post limit or blank is refused before any call.
    pub async fn create(&self, content: &str) -> Result<SavedItem, StoreError> {
        match validate_content(content) {
            Validity::Ok => {}
            Validity::Empty => return Err(StoreError::EmptyContent),
            Validity::TooLong { chars } => {
                return Err(StoreError::ContentTooLong {
                    chars,
                    max: MAX_POST_CHARS,
                });
            }
        }

        let item = self.backend.insert(&NewSavedItem::new(content)).await?;
        info!(id = %item.id, "saved item created");
        Ok(item)
    }

    /// Every saved item, newest first. One round trip.
    pub async fn list_all(&self) -> Result<Vec<SavedItem>, StoreError> {
        let mut items = self.backend.select_all().await?;
        sort_newest_first(&mut items);
        Ok(items)
    }

    /// Look up a single item. One round trip.
    pub async fn get(&self, id: &str) -> Result<SavedItem, StoreError> {
        self.backend
            .select_by_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Delete `id`, then read it back to confirm it is gone. Two round trips.
    ///
    /// An id that is already absent is a successful delete. If the row still
    /// resolves after the backend acknowledged the delete, the result is
    /// `DeletionNotConfirmed`.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.backend.delete(id).await?;

        if self.backend.select_by_id(id).await?.is_some() {
            warn!(id, "row still present after delete");
            return Err(StoreError::DeletionNotConfirmed { id: id.to_string() });
        }

        info!(id, "saved item deleted");
        Ok(())
    }
}
