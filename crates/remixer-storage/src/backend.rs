use std::future::Future;
use std::pin::Pin;

use remixer_core::models::saved_item::{NewSavedItem, SavedItem};

use crate::error::StoreError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Row-level operations against the saved-items table.
///
/// Each method is exactly one round trip to the backing store. Methods
/// return boxed futures for dyn compatibility.
pub trait RowBackend: Send + Sync {
    /// Insert one row and return it as stored, with server-assigned fields.
    fn insert<'a>(&'a self, row: &'a NewSavedItem) -> BoxFuture<'a, Result<SavedItem, StoreError>>;

    /// All rows, newest first.
    fn select_all(&self) -> BoxFuture<'_, Result<Vec<SavedItem>, StoreError>>;

    /// Delete by id. Deleting a missing id is not an error.
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Look up one row. `Ok(None)` when absent.
    fn select_by_id<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Option<SavedItem>, StoreError>>;
}
