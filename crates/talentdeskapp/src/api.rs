//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every desk operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the store and the navigation state, so a UI holds one object
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Validation**: Typed inputs are validated by the caller at the UI
//!   boundary; the store trusts what it is given
//! - **I/O operations**: No stdout, stderr, or network. Remote analysis lives
//!   in [`crate::analysis`] and never goes through the store
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Missing Targets
//!
//! Operations on an id that does not exist return `Ok` with
//! [`CmdResult::is_noop`] set. Nothing is committed and no notification is
//! emitted. UIs that want to tell the user can check `is_noop()`.
//!
//! ## Generic Over DataStore
//!
//! `TalentApi<S: DataStore>` is generic over the storage backend. The desk
//! ships with [`InMemoryStore`](crate::store::memory::InMemoryStore) only, but
//! tests can inject a pre-built fixture store.
//!
//! ## Testing Strategy
//!
//! API tests should verify:
//! - Correct command is called for each method
//! - Navigation and store state stay independent
//!
//! API tests should **not** verify:
//! - Command logic (tested in command modules)

use crate::commands::get::{ExerciseFilter, PlayerFilter, TemplateFilter};
use crate::commands::{self, dashboard::DashboardSummary, CmdResult};
use crate::error::Result;
use crate::model::{
    CandidateStatus, ExercisePatch, NewExercise, NewPlayer, NewTemplate, PipelineStage,
    TemplatePatch,
};
use crate::navigation::NavigationState;
use crate::store::memory::InMemoryStore;
use crate::store::{AppState, DataStore, VideoList};

/// The main API facade for desk operations.
pub struct TalentApi<S: DataStore> {
    store: S,
    nav: NavigationState,
}

impl TalentApi<InMemoryStore> {
    /// Desk over a freshly seeded in-memory store.
    pub fn seeded() -> Self {
        Self::new(InMemoryStore::seeded())
    }
}

impl<S: DataStore> TalentApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            nav: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    // --- Templates ---

    pub fn add_template(&mut self, input: NewTemplate) -> Result<CmdResult> {
        commands::templates::add(&mut self.store, input)
    }

    pub fn update_template(&mut self, id: &str, patch: &TemplatePatch) -> Result<CmdResult> {
        commands::templates::update(&mut self.store, id, patch)
    }

    pub fn duplicate_template(&mut self, id: &str) -> Result<CmdResult> {
        commands::templates::duplicate(&mut self.store, id)
    }

    pub fn delete_template(&mut self, id: &str) -> Result<CmdResult> {
        commands::templates::delete(&mut self.store, id)
    }

    pub fn assign_template(&mut self, id: &str, count: i64) -> Result<CmdResult> {
        commands::templates::assign(&mut self.store, id, count)
    }

    pub fn get_templates(&self, filter: &TemplateFilter) -> CmdResult {
        commands::get::templates(&self.store, filter)
    }

    // --- Exercises ---

    pub fn add_exercise(&mut self, input: NewExercise) -> Result<CmdResult> {
        commands::exercises::add(&mut self.store, input)
    }

    pub fn update_exercise(&mut self, id: &str, patch: &ExercisePatch) -> Result<CmdResult> {
        commands::exercises::update(&mut self.store, id, patch)
    }

    pub fn delete_exercise(&mut self, id: &str) -> Result<CmdResult> {
        commands::exercises::delete(&mut self.store, id)
    }

    pub fn get_exercises(&self, filter: &ExerciseFilter) -> CmdResult {
        commands::get::exercises(&self.store, filter)
    }

    // --- Videos ---

    pub fn review_video(&mut self, id: &str, score: f64) -> Result<CmdResult> {
        commands::videos::review(&mut self.store, id, score)
    }

    pub fn flag_video(&mut self, id: &str, reason: &str) -> Result<CmdResult> {
        commands::videos::flag(&mut self.store, id, reason)
    }

    pub fn review_flagged_video(&mut self, id: &str, score: f64) -> Result<CmdResult> {
        commands::videos::review_flagged(&mut self.store, id, score)
    }

    pub fn unflag_video(&mut self, id: &str) -> Result<CmdResult> {
        commands::videos::unflag(&mut self.store, id)
    }

    pub fn get_videos(&self, list: VideoList) -> CmdResult {
        commands::get::videos(&self.store, list)
    }

    // --- Candidates and pipeline ---

    pub fn advance_candidate(&mut self, id: &str) -> Result<CmdResult> {
        commands::talent::advance_candidate(&mut self.store, id)
    }

    /// Sets the owner on the **pipeline** entry `id`.
    pub fn assign_candidate_owner(&mut self, id: &str, owner: &str) -> Result<CmdResult> {
        commands::talent::assign_owner(&mut self.store, id, owner)
    }

    pub fn advance_pipeline_stage(&mut self, id: &str) -> Result<CmdResult> {
        commands::talent::advance_pipeline(&mut self.store, id)
    }

    pub fn get_candidates(&self, status: Option<CandidateStatus>) -> CmdResult {
        commands::get::candidates(&self.store, status)
    }

    pub fn get_pipeline(&self, stage: Option<PipelineStage>) -> CmdResult {
        commands::get::pipeline(&self.store, stage)
    }

    // --- Players ---

    pub fn add_player(&mut self, input: NewPlayer) -> Result<CmdResult> {
        commands::players::add(&mut self.store, input)
    }

    pub fn get_players(&self, filter: &PlayerFilter) -> CmdResult {
        commands::get::players(&self.store, filter)
    }

    // --- Notifications ---

    pub fn push_notification(&mut self, message: &str, kind: Option<&str>) -> Result<CmdResult> {
        commands::notifications::push(&mut self.store, message, kind)
    }

    pub fn mark_all_notifications_read(&mut self) -> Result<CmdResult> {
        commands::notifications::mark_all_read(&mut self.store)
    }

    pub fn get_notifications(&self, kind: Option<&str>, unread_only: bool) -> CmdResult {
        commands::get::notifications(&self.store, kind, unread_only)
    }

    pub fn unread_count(&self) -> usize {
        self.store.state().notifications.unread_count()
    }

    pub fn dashboard(&self) -> DashboardSummary {
        commands::dashboard::run(&self.store)
    }

    // --- Navigation ---

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn set_active_section(&mut self, section: &str, sub_item: Option<&str>) {
        self.nav.set_active_section(section, sub_item);
    }

    pub fn set_selected_player_id(&mut self, id: Option<&str>) {
        self.nav.set_selected_player_id(id);
    }

    pub fn toggle_expanded(&mut self, item: &str) {
        self.nav.toggle_expanded(item);
    }
}
