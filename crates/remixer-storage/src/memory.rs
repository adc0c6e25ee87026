//! In-process backend for tests and local demos.
//!
//! Behaves like the remote table: ids are assigned on insert, `created_at`
//! is strictly increasing, listing is newest first. It also counts round
//! trips and can be told to acknowledge deletes without removing anything,
//! which is how a silently failing remote delete looks from the outside.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use remixer_core::models::saved_item::{NewSavedItem, SavedItem, sort_newest_first};
use uuid::Uuid;

use crate::backend::{BoxFuture, RowBackend};
use crate::error::StoreError;

/// Round trips per operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub insert: usize,
    pub select_all: usize,
    pub delete: usize,
    pub select_by_id: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.insert + self.select_all + self.delete + self.select_by_id
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    rows: Mutex<Vec<SavedItem>>,
    last_created: Mutex<Option<jiff::Timestamp>>,
    ghost_deletes: AtomicBool,
    offline: AtomicBool,
    inserts: AtomicUsize,
    selects: AtomicUsize,
    deletes: AtomicUsize,
    lookups: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, deletes report success but leave the row in place.
    pub fn set_ghost_deletes(&self, enabled: bool) {
        self.ghost_deletes.store(enabled, Ordering::SeqCst);
    }

    /// When set, every operation fails with `TransportFailure`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Remove a row directly, as another client would.
    pub fn remove_externally(&self, id: &str) {
        self.lock_rows().retain(|row| row.id != id);
    }

    pub fn len(&self) -> usize {
        self.lock_rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            insert: self.inserts.load(Ordering::SeqCst),
            select_all: self.selects.load(Ordering::SeqCst),
            delete: self.deletes.load(Ordering::SeqCst),
            select_by_id: self.lookups.load(Ordering::SeqCst),
        }
    }

    fn lock_rows(&self) -> std::sync::MutexGuard<'_, Vec<SavedItem>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::TransportFailure("memory backend is offline".to_string()))
        } else {
            Ok(())
        }
    }

    /// Now, bumped past the previous insert so ordering is total.
    fn next_timestamp(&self) -> jiff::Timestamp {
        let mut last = self
            .last_created
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut now = jiff::Timestamp::now();
        if let Some(prev) = *last {
            if now <= prev {
                now = prev
                    .checked_add(jiff::SignedDuration::from_micros(1))
                    .unwrap_or(prev);
            }
        }
        *last = Some(now);
        now
    }

    fn insert_row(&self, row: &NewSavedItem) -> Result<SavedItem, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let item = SavedItem {
            id: Uuid::new_v4().to_string(),
            content: row.content.clone(),
            created_at: self.next_timestamp(),
            user_id: row.user_id.clone(),
        };
        self.lock_rows().push(item.clone());
        Ok(item)
    }

    fn select_rows(&self) -> Result<Vec<SavedItem>, StoreError> {
        self.selects.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let mut rows = self.lock_rows().clone();
        sort_newest_first(&mut rows);
        Ok(rows)
    }

    fn delete_row(&self, id: &str) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        if !self.ghost_deletes.load(Ordering::SeqCst) {
            self.lock_rows().retain(|row| row.id != id);
        }
        Ok(())
    }

    fn select_row(&self, id: &str) -> Result<Option<SavedItem>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.lock_rows().iter().find(|row| row.id == id).cloned())
    }
}

impl RowBackend for MemoryBackend {
    fn insert<'a>(&'a self, row: &'a NewSavedItem) -> BoxFuture<'a, Result<SavedItem, StoreError>> {
        Box::pin(async move { self.insert_row(row) })
    }

    fn select_all(&self) -> BoxFuture<'_, Result<Vec<SavedItem>, StoreError>> {
        Box::pin(async move { self.select_rows() })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move { self.delete_row(id) })
    }

    fn select_by_id<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Option<SavedItem>, StoreError>> {
        Box::pin(async move { self.select_row(id) })
    }
}
