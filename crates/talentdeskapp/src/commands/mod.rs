//! # Command Layer
//!
//! This module contains the **core business logic** of the desk. Each domain
//! area lives in its own submodule and exposes plain functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Transitions
//!
//! Every mutating command follows the same shape:
//!
//! 1. Look up its target in the current snapshot. Missing target → silent
//!    no-op: `Ok(CmdResult::default())`, nothing committed, no notification.
//! 2. Clone the snapshot and build the next state.
//! 3. Append the notification describing the change to the next state's feed.
//! 4. Commit once.
//!
//! Steps 2–4 are [`helpers::commit_transition`], so a command cannot change
//! state without emitting its notification, and cannot emit one without
//! committing.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected`: records created or changed, in their post-operation form
//! - `listed`: records returned by read-side commands
//! - `notification`: the feed entry emitted by this command, if any
//! - `messages`: leveled messages for a UI to render
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and `StoreFixture`, and check both the committed state and
//! the emitted notification.
//!
//! ## Command Modules
//!
//! - [`templates`]: create/update/duplicate/delete/assign templates
//! - [`exercises`]: create/update/delete exercises
//! - [`videos`]: review and flag workflow over the three video lists
//! - [`talent`]: candidate and pipeline stage progression, owners
//! - [`players`]: player registration
//! - [`notifications`]: push and mark-read on the feed
//! - [`get`]: filtered listings
//! - [`dashboard`]: summary metrics
//! - [`helpers`]: id generation, dates, the shared commit step

use crate::model::{
    Candidate, Exercise, Notification, PipelineEntry, Player, Template, VideoCompleted,
    VideoFlagged, VideoPending,
};
use serde::Serialize;

pub mod dashboard;
pub mod exercises;
pub mod get;
pub mod helpers;
pub mod notifications;
pub mod players;
pub mod talent;
pub mod templates;
pub mod videos;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Any record a command can hand back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum Entity {
    Template(Template),
    Exercise(Exercise),
    Candidate(Candidate),
    PipelineEntry(PipelineEntry),
    Player(Player),
    PendingVideo(VideoPending),
    CompletedVideo(VideoCompleted),
    FlaggedVideo(VideoFlagged),
    Notification(Notification),
}

impl Entity {
    pub fn id(&self) -> &str {
        match self {
            Entity::Template(t) => &t.id,
            Entity::Exercise(e) => &e.id,
            Entity::Candidate(c) => &c.id,
            Entity::PipelineEntry(p) => &p.id,
            Entity::Player(p) => &p.id,
            Entity::PendingVideo(v) => &v.id,
            Entity::CompletedVideo(v) => &v.id,
            Entity::FlaggedVideo(v) => &v.id,
            Entity::Notification(n) => &n.id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CmdResult {
    pub affected: Vec<Entity>,
    pub listed: Vec<Entity>,
    pub notification: Option<Notification>,
    pub messages: Vec<CmdMessage>,
    /// True when this command replaced the store's state.
    pub committed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, affected: Vec<Entity>) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_listed(mut self, listed: Vec<Entity>) -> Self {
        self.listed = listed;
        self
    }

    /// True when nothing was committed. For a mutation this means its target
    /// did not exist; read-side results never commit, so it only makes sense
    /// to ask this of a mutation's result.
    pub fn is_noop(&self) -> bool {
        !self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn noop_distinguishes_missing_targets_from_commits() {
        let mut store = InMemoryStore::seeded();

        assert!(templates::delete(&mut store, "NOPE").unwrap().is_noop());
        assert!(!templates::delete(&mut store, "TPL001").unwrap().is_noop());

        let listed = get::candidates(&store, None);
        assert!(!listed.committed);
        assert!(listed.affected.is_empty());
        assert!(listed.notification.is_none());
    }
}
