use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use remixer_llm::remix::RemixEngine;
use remixer_storage::store::SavedItemStore;
use tokio::sync::Mutex;
use tracing::debug;

use crate::action::Action;
use crate::effect::{Effect, Event};
use crate::state::PanelState;

/// How long a `Saved` marker stays visible.
pub const SAVE_MARKER_WINDOW: Duration = Duration::from_secs(2);

struct Inner {
    engine: RemixEngine,
    store: SavedItemStore,
    state: Mutex<PanelState>,
}

/// Runs actions against the panel state and performs their effects.
///
/// The state lock is only held for a pure transition, never across a
/// network call, so other actions can be dispatched while one is in flight.
#[derive(Clone)]
pub struct PanelController {
    inner: Arc<Inner>,
    save_marker_window: Duration,
}

impl PanelController {
    pub fn new(engine: RemixEngine, store: SavedItemStore) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine,
                store,
                state: Mutex::new(PanelState::new()),
            }),
            save_marker_window: SAVE_MARKER_WINDOW,
        }
    }

    pub fn with_save_marker_window(mut self, window: Duration) -> Self {
        self.save_marker_window = window;
        self
    }

    pub async fn snapshot(&self) -> PanelState {
        self.inner.state.lock().await.clone()
    }

    /// Apply `action`, run every effect it leads to, and return the
    /// resulting state.
    pub async fn dispatch(&self, action: Action) -> PanelState {
        debug!(action = action.name(), "dispatch");
        let effects = self.inner.state.lock().await.begin(action);
        self.run(effects).await;
        self.snapshot().await
    }

    async fn run(&self, effects: Vec<Effect>) {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            let Some(event) = self.perform(effect).await else {
                continue;
            };
            let follow_up = self.inner.state.lock().await.apply(event);
            queue.extend(follow_up);
        }
    }

    async fn perform(&self, effect: Effect) -> Option<Event> {
        let event = match effect {
            Effect::Generate { cycle, source_text } => Event::Generated {
                cycle,
                result: self.inner.engine.generate(&source_text).await,
            },
            Effect::Save { candidate, content } => Event::Saved {
                candidate,
                result: self.inner.store.create(&content).await,
            },
            Effect::Delete { id } => {
                let result = self.inner.store.delete(&id).await;
                Event::Deleted { id, result }
            }
            Effect::Refresh { seq } => Event::Refreshed {
                seq,
                result: self.inner.store.list_all().await,
            },
            Effect::ExpireSaveMarker { candidate, ticket } => {
                let inner = Arc::clone(&self.inner);
                let window = self.save_marker_window;
                tokio::spawn(async move {
                    tokio::time::sleep(window).await;
                    inner
                        .state
                        .lock()
                        .await
                        .apply(Event::SaveMarkerExpired { candidate, ticket });
                });
                return None;
            }
        };
        Some(event)
    }
}
