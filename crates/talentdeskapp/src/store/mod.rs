//! # Storage Layer
//!
//! The store owns every domain collection. The [`DataStore`] trait exposes it as
//! an immutable snapshot ([`DataStore::state`]) plus a single atomic replacement
//! ([`DataStore::commit`]).
//!
//! ## Why Snapshot + Commit
//!
//! Commands never mutate collections in place. They clone the current
//! [`AppState`], build the next one (moving a video out of one list and into
//! another, appending the notification) and hand it to `commit` in one call.
//! A reader therefore observes either the whole transition or none of it; no
//! video is ever in two lists or in none.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. State lives for the process
//!   lifetime and is re-seeded on every start.

use crate::error::Result;
use crate::model::{
    Candidate, Exercise, PipelineEntry, Player, Template, VideoCompleted, VideoFlagged,
    VideoPending,
};
use crate::notifications::NotificationFeed;
use serde::{Deserialize, Serialize};

pub mod memory;

/// Every collection the desk works with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub templates: Vec<Template>,
    pub exercises: Vec<Exercise>,
    pub candidates: Vec<Candidate>,
    pub pipeline: Vec<PipelineEntry>,
    pub players: Vec<Player>,
    pub videos_pending: Vec<VideoPending>,
    pub videos_completed: Vec<VideoCompleted>,
    pub videos_flagged: Vec<VideoFlagged>,
    pub notifications: NotificationFeed,
}

impl AppState {
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn pipeline_entry(&self, id: &str) -> Option<&PipelineEntry> {
        self.pipeline.iter().find(|c| c.id == id)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Which review list, if any, currently holds video `id`.
    pub fn video_location(&self, id: &str) -> Option<VideoList> {
        if self.videos_pending.iter().any(|v| v.id == id) {
            Some(VideoList::Pending)
        } else if self.videos_completed.iter().any(|v| v.id == id) {
            Some(VideoList::Completed)
        } else if self.videos_flagged.iter().any(|v| v.id == id) {
            Some(VideoList::Flagged)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoList {
    Pending,
    Completed,
    Flagged,
}

/// Abstract interface for the desk's state container.
///
/// Implementations must make `commit` atomic: after it returns, `state` yields
/// exactly `next`, and no caller can observe a partially applied state.
pub trait DataStore {
    /// Current snapshot.
    fn state(&self) -> &AppState;

    /// Replace the whole state in one step.
    fn commit(&mut self, next: AppState) -> Result<()>;

    /// Number of commits applied so far. Unchanged by no-op operations.
    fn revision(&self) -> u64;
}
