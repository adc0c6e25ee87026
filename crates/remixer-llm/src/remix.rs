use std::sync::Arc;

use remixer_core::models::candidate::Candidate;
use remixer_core::models::generation::{GenerationRequest, GenerationResult};
use tracing::{info, warn};

use crate::chat::{ChatRequest, ChatTransport};
use crate::error::LlmError;
use crate::prompt::{self, GHOST_WRITER_PROMPT};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Turns source text into candidates with one chat-completion call.
///
/// Holds no per-call state: concurrent `generate` calls are independent.
/// No retries and no caching.
#[derive(Clone)]
pub struct RemixEngine {
    transport: Arc<dyn ChatTransport>,
    model: String,
    temperature: Option<f32>,
    prompt: String,
}

impl RemixEngine {
    pub fn new(transport: Arc<dyn ChatTransport>, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
            temperature: Some(DEFAULT_TEMPERATURE),
            prompt: GHOST_WRITER_PROMPT.to_string(),
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        if !prompt::mentions_marker(&self.prompt) {
            warn!("custom prompt does not mention the candidate marker");
        }
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the chat request for `source_text`, or fail with `EmptyInput`.
    pub fn build_request(&self, source_text: &str) -> Result<ChatRequest, LlmError> {
        let request = GenerationRequest::new(source_text, self.prompt.clone())
            .map_err(|_| LlmError::EmptyInput)?;

        Ok(ChatRequest {
            model: self.model.clone(),
            messages: prompt::build_messages(&request),
            temperature: self.temperature,
        })
    }

    /// Generate candidates from `source_text`.
    ///
    /// Blank input fails before any network call. A reply with no marker
    /// lines is an empty list, not an error.
    pub async fn generate(&self, source_text: &str) -> Result<Vec<Candidate>, LlmError> {
        let request = self.build_request(source_text)?;

        info!(model = %self.model, chars = request.user_chars(), "requesting generation");

        let raw = match self.transport.complete(&request).await {
            Ok(raw) => raw,
            Err(err) => {
                if let LlmError::MalformedResponse { reason, raw } = &err {
                    warn!(reason = %reason, payload = %raw, "malformed provider response");
                } else {
                    warn!(error = %err, "generation failed");
                }
                return Err(err);
            }
        };

        let candidates = GenerationResult::new(raw).candidates();

        info!(model = %self.model, count = candidates.len(), "generation complete");

        Ok(candidates)
    }
}
