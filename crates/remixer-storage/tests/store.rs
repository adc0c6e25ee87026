use std::collections::HashSet;
use std::sync::Arc;

use remixer_storage::error::StoreError;
use remixer_storage::memory::MemoryBackend;
use remixer_storage::store::SavedItemStore;

fn store() -> (Arc<MemoryBackend>, SavedItemStore) {
    let backend = Arc::new(MemoryBackend::new());
    let store = SavedItemStore::new(backend.clone());
    (backend, store)
}

#[tokio::test]
async fn create_then_list_round_trips_with_fresh_id() {
    let (backend, store) = store();
    let earlier = store.create("first post").await.unwrap();

    let item = store.create("second post").await.unwrap();
    assert_ne!(item.id, earlier.id);

    let listed = store.list_all().await.unwrap();
    let matching: Vec<_> = listed.iter().filter(|i| i.content == "second post").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, item.id);
    assert_eq!(backend.calls().insert, 2);
}

#[tokio::test]
async fn listing_is_newest_first_and_idempotent() {
    let (backend, store) = store();
    for n in 0..5 {
        store.create(&format!("post {n}")).await.unwrap();
    }

    let first = store.list_all().await.unwrap();
    let second = store.list_all().await.unwrap();
    assert_eq!(first, second);

    let contents: Vec<_> = first.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, ["post 4", "post 3", "post 2", "post 1", "post 0"]);
    assert!(first.windows(2).all(|w| w[0].created_at > w[1].created_at));
    assert_eq!(backend.calls().select_all, 2);
}

#[tokio::test]
async fn empty_and_large_lists_are_fine() {
    let (_backend, store) = store();
    assert!(store.list_all().await.unwrap().is_empty());

    for n in 0..500 {
        store.create(&format!("bulk {n}")).await.unwrap();
    }
    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 500);
    let ids: HashSet<_> = listed.iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids.len(), 500);
}

#[tokio::test]
async fn delete_is_verified_with_a_lookup() {
    let (backend, store) = store();
    let item = store.create("to be removed").await.unwrap();

    store.delete(&item.id).await.unwrap();

    let calls = backend.calls();
    assert_eq!(calls.delete, 1);
    assert_eq!(calls.select_by_id, 1);
    assert!(matches!(
        store.get(&item.id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn acknowledged_but_ineffective_delete_is_not_confirmed() {
    let (backend, store) = store();
    let item = store.create("sticky").await.unwrap();
    backend.set_ghost_deletes(true);

    let err = store.delete(&item.id).await.unwrap_err();
    match err {
        StoreError::DeletionNotConfirmed { id } => assert_eq!(id, item.id),
        other => panic!("expected DeletionNotConfirmed, got {other:?}"),
    }
    assert_eq!(backend.len(), 1);
}

#[tokio::test]
async fn deleting_an_already_removed_id_succeeds() {
    let (backend, store) = store();
    let item = store.create("raced").await.unwrap();
    backend.remove_externally(&item.id);

    store.delete(&item.id).await.unwrap();
    assert!(backend.is_empty());
}

#[tokio::test]
async fn over_limit_content_never_reaches_the_backend() {
    let (backend, store) = store();

    let err = store.create(&"x".repeat(281)).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::ContentTooLong {
            chars: 281,
            max: 280
        }
    ));

    let err = store.create("   ").await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyContent));

    assert_eq!(backend.calls().total(), 0);

    store.create(&"x".repeat(280)).await.unwrap();
    assert_eq!(backend.calls().insert, 1);
}

#[tokio::test]
async fn transport_failures_surface() {
    let (backend, store) = store();
    backend.set_offline(true);

    assert!(matches!(
        store.list_all().await,
        Err(StoreError::TransportFailure(_))
    ));
    assert!(matches!(
        store.delete("abc").await,
        Err(StoreError::TransportFailure(_))
    ));
    // The verification read is skipped when the delete itself fails.
    assert_eq!(backend.calls().select_by_id, 0);
}
