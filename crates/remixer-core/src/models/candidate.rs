use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Platform length ceiling for a single post, in Unicode scalar values.
pub const MAX_POST_CHARS: usize = 280;

/// Client-side temporary identifier for a candidate.
///
/// Assigned when the candidate is parsed out of a generation result and used
/// to key save actions. Never sent to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidateId(pub Uuid);

impl CandidateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CandidateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single generated item that has not been persisted.
///
/// `char_count` always reflects `text`: the only way to change the text is
/// [`Candidate::set_text`], which recounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Candidate {
    pub id: CandidateId,
    /// Zero-based position in the generation output.
    pub index: usize,
    text: String,
    char_count: usize,
}

impl Candidate {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let char_count = count_chars(&text);
        Self {
            id: CandidateId::new(),
            index,
            text,
            char_count,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Replace the draft text. Only the local candidate changes.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_count = count_chars(&self.text);
    }

    pub fn validity(&self) -> Validity {
        validate_content(&self.text)
    }

    pub fn is_postable(&self) -> bool {
        self.validity() == Validity::Ok
    }
}

/// Whether a piece of text may be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Validity {
    Ok,
    Empty,
    TooLong { chars: usize },
}

pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

pub fn validate_content(text: &str) -> Validity {
    if text.trim().is_empty() {
        return Validity::Empty;
    }
    let chars = count_chars(text);
    if chars > MAX_POST_CHARS {
        Validity::TooLong { chars }
    } else {
        Validity::Ok
    }
}
