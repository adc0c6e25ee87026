//! remixer-llm
//!
//! Chat-completion invocation against OpenAI-compatible providers and
//! candidate extraction from the reply.

pub mod chat;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod remix;
