use remixer_core::models::candidate::CandidateId;
use serde::{Deserialize, Serialize};

/// Everything a user can ask the panel to do.
///
/// Serialized with a `type` tag, e.g. `{"type":"save_candidate","id":"…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetInput { text: String },
    ClearInput,
    Generate,
    EditCandidate { id: CandidateId, text: String },
    SaveCandidate { id: CandidateId },
    DeleteSaved { id: String },
    RefreshSaved,
    OpenSavedPanel,
    CloseSavedPanel,
    DismissBanner,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetInput { .. } => "set_input",
            Action::ClearInput => "clear_input",
            Action::Generate => "generate",
            Action::EditCandidate { .. } => "edit_candidate",
            Action::SaveCandidate { .. } => "save_candidate",
            Action::DeleteSaved { .. } => "delete_saved",
            Action::RefreshSaved => "refresh_saved",
            Action::OpenSavedPanel => "open_saved_panel",
            Action::CloseSavedPanel => "close_saved_panel",
            Action::DismissBanner => "dismiss_banner",
        }
    }
}
