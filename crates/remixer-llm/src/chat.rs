//! OpenAI-compatible chat-completion wire format and transport.
//!
//! Every supported provider accepts the same request shape:
//!
//! ```text
//! POST {base}/chat/completions
//! Authorization: Bearer <key>
//! { "model": "...", "messages": [{"role": "system", "content": "..."}, ...],
//!   "temperature": 0.7 }
//! ```
//!
//! and answers with `{ "choices": [{ "message": { "content": "..." } }] }`.
//! Only the first choice is used.
//!
//! Status classification lives in [`decode_completion`], a pure function, so
//! it can be exercised without a network.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use remixer_core::credential::ApiKey;
use remixer_core::models::candidate::count_chars;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Characters of user text carried by the request, as sent.
    pub fn user_chars(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .map(|m| count_chars(&m.content))
            .sum()
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

// ── Transport ────────────────────────────────────────────────────────────────

/// Sends one chat request and returns the assistant text.
///
/// Returns a boxed future for dyn compatibility.
pub trait ChatTransport: Send + Sync {
    fn complete<'a>(&'a self, request: &'a ChatRequest) -> BoxFuture<'a, Result<String, LlmError>>;
}

/// Classify a provider response and pull out the first choice's content.
pub fn decode_completion(status: u16, body: &str) -> Result<String, LlmError> {
    match status {
        200..=299 => {}
        401 | 403 => return Err(LlmError::Unauthorized),
        429 => return Err(LlmError::RateLimited),
        other => return Err(LlmError::Upstream { status: other }),
    }

    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse {
            reason: format!("body is not a chat completion: {e}"),
            raw: body.to_string(),
        })?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse {
            reason: "no choices in response".to_string(),
            raw: body.to_string(),
        })?;

    choice
        .message
        .content
        .ok_or_else(|| LlmError::MalformedResponse {
            reason: "first choice has no content".to_string(),
            raw: body.to_string(),
        })
}

/// HTTP transport over `reqwest`.
pub struct HttpChatTransport {
    http: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
}

impl HttpChatTransport {
    pub fn new(base_url: &str, api_key: ApiKey, timeout: Duration) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: completions_endpoint(base_url),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Unreachable(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| LlmError::Unreachable(e.to_string()))?;

        decode_completion(status, &body)
    }
}

impl ChatTransport for HttpChatTransport {
    fn complete<'a>(&'a self, request: &'a ChatRequest) -> BoxFuture<'a, Result<String, LlmError>> {
        Box::pin(self.send(request))
    }
}

pub fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}
