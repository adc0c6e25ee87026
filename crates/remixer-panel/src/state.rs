//! The panel's state container and its transitions.
//!
//! Per generation cycle: `Idle → Generating → {Ready, Failed}`.
//! Per candidate save: `Unsaved → Saving → {Saved, SaveFailed}`; `Saved`
//! reverts to `Unsaved` after the display window.
//! Per saved item delete: `Present → Deleting → {removed, DeleteFailed}`; a
//! failed delete always re-fetches the list.
//!
//! Nothing here performs I/O. Late results are matched against the cycle
//! number, candidate id, marker ticket or refresh sequence they were issued
//! for, and dropped if the state has moved on. A refresh that is still in
//! flight when a save or delete completes is replaced by a new one.

use remixer_core::models::candidate::{Candidate, CandidateId, Validity};
use remixer_core::models::generation::validate_source;
use remixer_core::models::saved_item::SavedItem;
use remixer_core::share;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::effect::{Effect, Event};
use crate::message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SaveMarker {
    #[default]
    Unsaved,
    Saving,
    Saved {
        #[serde(skip)]
        ticket: u64,
    },
    SaveFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteMarker {
    #[default]
    Present,
    Deleting,
    DeleteFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub level: BannerLevel,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Error,
            message: message.into(),
        }
    }
}

/// A generated candidate plus its save marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateDraft {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub validity: Validity,
    pub save: SaveMarker,
}

impl CandidateDraft {
    fn new(candidate: Candidate) -> Self {
        let validity = candidate.validity();
        Self {
            candidate,
            validity,
            save: SaveMarker::Unsaved,
        }
    }

    fn set_text(&mut self, text: String) {
        self.candidate.set_text(text);
        self.validity = self.candidate.validity();
    }
}

/// A persisted item plus its delete marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedEntry {
    #[serde(flatten)]
    pub item: SavedItem,
    pub delete: DeleteMarker,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PanelState {
    pub input: String,
    pub phase: GenerationPhase,
    pub candidates: Vec<CandidateDraft>,
    pub saved: Vec<SavedEntry>,
    pub saved_loading: bool,
    pub panel_open: bool,
    pub banner: Option<Banner>,
    #[serde(skip)]
    cycle: u64,
    #[serde(skip)]
    last_ticket: u64,
    #[serde(skip)]
    last_refresh: u64,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&CandidateDraft> {
        self.candidates.iter().find(|d| d.candidate.id == id)
    }

    pub fn saved_entry(&self, id: &str) -> Option<&SavedEntry> {
        self.saved.iter().find(|e| e.item.id == id)
    }

    pub fn candidate_share_url(&self, id: CandidateId) -> Option<String> {
        let draft = self.candidate(id)?;
        share::intent_url(draft.candidate.text()).ok()
    }

    pub fn saved_share_url(&self, id: &str) -> Option<String> {
        let entry = self.saved_entry(id)?;
        share::intent_url(&entry.item.content).ok()
    }

    /// Apply a user action. Returns the effects it needs performed.
    pub fn begin(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::SetInput { text } => {
                self.input = text;
                Vec::new()
            }
            Action::ClearInput => {
                self.input.clear();
                Vec::new()
            }
            Action::Generate => self.begin_generate(),
            Action::EditCandidate { id, text } => {
                if let Some(draft) = self.candidate_mut(id) {
                    draft.set_text(text);
                    if matches!(draft.save, SaveMarker::Saved { .. } | SaveMarker::SaveFailed) {
                        draft.save = SaveMarker::Unsaved;
                    }
                }
                Vec::new()
            }
            Action::SaveCandidate { id } => self.begin_save(id),
            Action::DeleteSaved { id } => self.begin_delete(id),
            Action::RefreshSaved => vec![self.issue_refresh()],
            Action::OpenSavedPanel => {
                self.panel_open = true;
                vec![self.issue_refresh()]
            }
            Action::CloseSavedPanel => {
                self.panel_open = false;
                Vec::new()
            }
            Action::DismissBanner => {
                self.banner = None;
                Vec::new()
            }
        }
    }

    /// Fold an effect's result back in. Returns any follow-up effects.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Generated { cycle, result } => {
                if cycle != self.cycle || self.phase != GenerationPhase::Generating {
                    debug!(cycle, current = self.cycle, "discarding stale generation result");
                    return Vec::new();
                }
                match result {
                    Ok(candidates) => {
                        info!(cycle, count = candidates.len(), "candidates ready");
                        if candidates.is_empty() {
                            self.banner = Some(Banner::info(message::NOTHING_PRODUCED));
                        }
                        self.candidates = candidates.into_iter().map(CandidateDraft::new).collect();
                        self.phase = GenerationPhase::Ready;
                    }
                    Err(err) => {
                        self.phase = GenerationPhase::Failed;
                        self.banner = Some(Banner::error(message::generation(&err)));
                    }
                }
                Vec::new()
            }
            Event::Saved { candidate, result } => self.finish_save(candidate, result),
            Event::SaveMarkerExpired { candidate, ticket } => {
                if let Some(draft) = self.candidate_mut(candidate) {
                    if draft.save == (SaveMarker::Saved { ticket }) {
                        draft.save = SaveMarker::Unsaved;
                    }
                }
                Vec::new()
            }
            Event::Deleted { id, result } => match result {
                Ok(()) => {
                    self.saved.retain(|e| e.item.id != id);
                    self.supersede_refresh().into_iter().collect()
                }
                Err(err) => {
                    warn!(id = %id, error = %err, "delete failed, resynchronising");
                    if let Some(entry) = self.saved.iter_mut().find(|e| e.item.id == id) {
                        entry.delete = DeleteMarker::DeleteFailed;
                    }
                    self.banner = Some(Banner::error(message::delete(&err)));
                    vec![self.issue_refresh()]
                }
            },
            Event::Refreshed { seq, result } => {
                if seq != self.last_refresh {
                    debug!(seq, latest = self.last_refresh, "discarding stale refresh");
                    return Vec::new();
                }
                self.saved_loading = false;
                match result {
                    Ok(items) => self.replace_saved(items),
                    Err(err) => self.banner = Some(Banner::error(message::refresh(&err))),
                }
                Vec::new()
            }
        }
    }

    fn begin_generate(&mut self) -> Vec<Effect> {
        if self.phase == GenerationPhase::Generating {
            return Vec::new();
        }
        let source_text = match validate_source(&self.input) {
            Ok(text) => text.to_string(),
            Err(_) => {
                self.banner = Some(Banner::error(message::EMPTY_INPUT));
                return Vec::new();
            }
        };

        self.cycle += 1;
        self.phase = GenerationPhase::Generating;
        self.candidates.clear();
        self.banner = None;
        vec![Effect::Generate {
            cycle: self.cycle,
            source_text,
        }]
    }

    fn begin_save(&mut self, id: CandidateId) -> Vec<Effect> {
        let Some(draft) = self.candidate_mut(id) else {
            return Vec::new();
        };
        if draft.save == SaveMarker::Saving {
            return Vec::new();
        }
        if let Some(reason) = message::invalid_candidate(draft.validity) {
            self.banner = Some(Banner::error(reason));
            return Vec::new();
        }

        draft.save = SaveMarker::Saving;
        let content = draft.candidate.text().to_string();
        vec![Effect::Save {
            candidate: id,
            content,
        }]
    }

    fn finish_save(
        &mut self,
        candidate: CandidateId,
        result: Result<SavedItem, remixer_storage::error::StoreError>,
    ) -> Vec<Effect> {
        match result {
            Ok(item) => {
                let mut effects = Vec::new();
                let content = item.content.clone();
                self.upsert_saved(item);

                self.last_ticket += 1;
                let ticket = self.last_ticket;
                if let Some(draft) = self.candidate_mut(candidate) {
                    if draft.save == SaveMarker::Saving {
                        // Edited while the save was in flight: the draft no
                        // longer matches what was stored.
                        if draft.candidate.text() == content {
                            draft.save = SaveMarker::Saved { ticket };
                            effects.push(Effect::ExpireSaveMarker { candidate, ticket });
                        } else {
                            draft.save = SaveMarker::Unsaved;
                        }
                    }
                }
                if self.panel_open {
                    effects.push(self.issue_refresh());
                } else {
                    effects.extend(self.supersede_refresh());
                }
                effects
            }
            Err(err) => {
                if let Some(draft) = self.candidate_mut(candidate) {
                    draft.save = SaveMarker::SaveFailed;
                }
                self.banner = Some(Banner::error(message::save(&err)));
                Vec::new()
            }
        }
    }

    fn begin_delete(&mut self, id: String) -> Vec<Effect> {
        let Some(entry) = self.saved.iter_mut().find(|e| e.item.id == id) else {
            return Vec::new();
        };
        if entry.delete == DeleteMarker::Deleting {
            return Vec::new();
        }
        entry.delete = DeleteMarker::Deleting;
        vec![Effect::Delete { id }]
    }

    /// A refresh issued before a local insert or removal would undo it when
    /// it lands. Replace any outstanding one with a fresh fetch.
    fn supersede_refresh(&mut self) -> Option<Effect> {
        self.saved_loading.then(|| self.issue_refresh())
    }

    fn issue_refresh(&mut self) -> Effect {
        self.last_refresh += 1;
        self.saved_loading = true;
        Effect::Refresh {
            seq: self.last_refresh,
        }
    }

    fn candidate_mut(&mut self, id: CandidateId) -> Option<&mut CandidateDraft> {
        self.candidates.iter_mut().find(|d| d.candidate.id == id)
    }

    fn upsert_saved(&mut self, item: SavedItem) {
        match self.saved.iter_mut().find(|e| e.item.id == item.id) {
            Some(entry) => entry.item = item,
            None => self.saved.push(SavedEntry {
                item,
                delete: DeleteMarker::Present,
            }),
        }
        self.sort_saved();
    }

    /// Server truth replaces the list; markers survive for ids still present.
    fn replace_saved(&mut self, items: Vec<SavedItem>) {
        let previous = std::mem::take(&mut self.saved);
        self.saved = items
            .into_iter()
            .map(|item| {
                let delete = previous
                    .iter()
                    .find(|e| e.item.id == item.id)
                    .map(|e| e.delete)
                    .unwrap_or_default();
                SavedEntry { item, delete }
            })
            .collect();
        self.sort_saved();
    }

    fn sort_saved(&mut self) {
        self.saved
            .sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
    }
}
