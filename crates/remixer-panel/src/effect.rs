use remixer_core::models::candidate::{Candidate, CandidateId};
use remixer_core::models::saved_item::SavedItem;
use remixer_llm::error::LlmError;
use remixer_storage::error::StoreError;

/// A side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the remix engine for generation cycle `cycle`.
    Generate { cycle: u64, source_text: String },
    /// Persist a snapshot of a candidate's text.
    Save {
        candidate: CandidateId,
        content: String,
    },
    /// Revert a `Saved` marker once the display window has passed.
    ExpireSaveMarker { candidate: CandidateId, ticket: u64 },
    /// Delete a saved item (with verification).
    Delete { id: String },
    /// Re-fetch the saved list. Only the latest `seq` is applied.
    Refresh { seq: u64 },
}

/// The outcome of an effect, fed back into the state.
#[derive(Debug)]
pub enum Event {
    Generated {
        cycle: u64,
        result: Result<Vec<Candidate>, LlmError>,
    },
    Saved {
        candidate: CandidateId,
        result: Result<SavedItem, StoreError>,
    },
    SaveMarkerExpired {
        candidate: CandidateId,
        ticket: u64,
    },
    Deleted {
        id: String,
        result: Result<(), StoreError>,
    },
    Refreshed {
        seq: u64,
        result: Result<Vec<SavedItem>, StoreError>,
    },
}
