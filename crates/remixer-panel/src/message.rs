//! User-visible banner text for every error kind.
//!
//! Messages never include credential values or raw provider payloads.

use remixer_core::models::candidate::{MAX_POST_CHARS, Validity};
use remixer_llm::error::LlmError;
use remixer_storage::error::StoreError;

pub const EMPTY_INPUT: &str = "Please enter some text to remix.";
pub const NOTHING_PRODUCED: &str =
    "The model didn't produce any tweets. Try rephrasing your text.";

pub fn generation(err: &LlmError) -> String {
    match err {
        LlmError::EmptyInput => EMPTY_INPUT.to_string(),
        LlmError::Unauthorized => {
            "Invalid AI provider API key. Please check your credentials and try again.".to_string()
        }
        LlmError::RateLimited => {
            "Too many requests. Please wait a moment and try again.".to_string()
        }
        LlmError::Unreachable(_) => {
            "Could not reach the AI provider. Check your connection and try again.".to_string()
        }
        LlmError::Upstream { status } => {
            format!("The AI provider returned an error (status {status}). Please try again.")
        }
        LlmError::MalformedResponse { .. } => {
            "The AI provider returned an unexpected response. Please try again.".to_string()
        }
        LlmError::Config(_) => "The AI provider client is misconfigured.".to_string(),
    }
}

pub fn save(err: &StoreError) -> String {
    format!("Failed to save tweet. {}", store(err))
}

pub fn delete(err: &StoreError) -> String {
    match err {
        StoreError::DeletionNotConfirmed { .. } => {
            "The tweet could not be confirmed as deleted. The list has been refreshed.".to_string()
        }
        other => format!("Failed to delete tweet. {}", store(other)),
    }
}

pub fn refresh(err: &StoreError) -> String {
    format!("Failed to load saved tweets. {}", store(err))
}

pub fn invalid_candidate(validity: Validity) -> Option<String> {
    match validity {
        Validity::Ok => None,
        Validity::Empty => Some("There is nothing to save.".to_string()),
        Validity::TooLong { chars } => Some(format!(
            "This tweet is {chars} characters; the limit is {MAX_POST_CHARS}."
        )),
    }
}

fn store(err: &StoreError) -> String {
    match err {
        StoreError::Unauthorized => {
            "The saved tweets store rejected the credentials. Please check your credentials."
                .to_string()
        }
        StoreError::TransportFailure(_) => {
            "Could not reach the saved tweets store. Check your connection and try again."
                .to_string()
        }
        StoreError::NotFound { .. } => "That tweet no longer exists.".to_string(),
        StoreError::DeletionNotConfirmed { .. } => {
            "The tweet could not be confirmed as deleted.".to_string()
        }
        StoreError::Rejected { .. } => "The saved tweets store rejected the request.".to_string(),
        StoreError::UnexpectedResponse(_) => {
            "The saved tweets store returned an unexpected response.".to_string()
        }
        StoreError::ContentTooLong { max, .. } => {
            format!("Tweets are limited to {max} characters.")
        }
        StoreError::EmptyContent => "There is nothing to save.".to_string(),
        StoreError::Config(_) => "The saved tweets store is misconfigured.".to_string(),
    }
}
