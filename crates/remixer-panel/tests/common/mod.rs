#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use remixer_llm::chat::{BoxFuture, ChatRequest, ChatTransport};
use remixer_llm::error::LlmError;
use remixer_llm::remix::RemixEngine;
use remixer_panel::controller::PanelController;
use remixer_storage::memory::MemoryBackend;
use remixer_storage::store::SavedItemStore;
use tokio::sync::Notify;

/// Replays canned replies in order; optionally waits on a gate first.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub fn replying(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        })
    }

    pub fn gated(replies: Vec<Result<String, LlmError>>, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            gate: Some(gate),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChatTransport for ScriptedTransport {
    fn complete<'a>(
        &'a self,
        _request: &'a ChatRequest,
    ) -> BoxFuture<'a, Result<String, LlmError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()));
        let gate = self.gate.clone();
        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            reply
        })
    }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub backend: Arc<MemoryBackend>,
    pub controller: PanelController,
}

pub fn harness(transport: Arc<ScriptedTransport>) -> Harness {
    let backend = Arc::new(MemoryBackend::new());
    let engine = RemixEngine::new(transport.clone(), "test-model");
    let store = SavedItemStore::new(backend.clone());
    let controller =
        PanelController::new(engine, store).with_save_marker_window(Duration::from_millis(50));
    Harness {
        transport,
        backend,
        controller,
    }
}

pub fn tweets(lines: &[&str]) -> Result<String, LlmError> {
    Ok(lines
        .iter()
        .map(|l| format!("TWEET: {l}"))
        .collect::<Vec<_>>()
        .join("\n"))
}
