use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use crate::error::CoreError;

/// Literal prefix that marks a line of model output as a candidate.
pub const CANDIDATE_MARKER: &str = "TWEET:";

/// One outbound generation: the instruction plus the text to transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub source_text: String,
    pub prompt_template: String,
}

impl GenerationRequest {
    /// Build a request, rejecting source text that is blank after trimming.
    pub fn new(
        source_text: &str,
        prompt_template: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let source_text = validate_source(source_text)?;
        Ok(Self {
            source_text: source_text.to_string(),
            prompt_template: prompt_template.into(),
        })
    }
}

/// Trim `text` and fail if nothing is left.
pub fn validate_source(text: &str) -> Result<&str, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(CoreError::EmptySource)
    } else {
        Ok(trimmed)
    }
}

/// Raw text returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub raw_text: String,
}

impl GenerationResult {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        parse_candidates(&self.raw_text)
    }
}

/// Extract marker-prefixed lines as candidates, indexed in appearance order.
///
/// Leading whitespace before the marker is tolerated. A marker with nothing
/// after it is skipped. Output with no marker lines yields an empty list.
pub fn parse_candidates(raw: &str) -> Vec<Candidate> {
    raw.lines()
        .filter_map(|line| line.trim_start().strip_prefix(CANDIDATE_MARKER))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(index, text)| Candidate::new(index, text))
        .collect()
}
