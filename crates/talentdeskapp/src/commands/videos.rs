//! Video review workflow.
//!
//! A video lives in exactly one of three lists:
//!
//! ```text
//!            review
//!   Pending ───────────────► Completed
//!      │                        ▲
//!      │ flag                   │ review
//!      ▼                        │
//!   Flagged ────────────────────┘
//!      │
//!      └── unflag ──► (removed)
//! ```
//!
//! Each move removes the video from its source and inserts it into its
//! destination inside the same committed state.

use crate::commands::helpers::{commit_transition, format_score, noop, today};
use crate::commands::{CmdResult, Entity};
use crate::error::Result;
use crate::model::{VideoCompleted, VideoFlagged, UNKNOWN_EXERCISE};
use crate::notifications::kinds;
use crate::store::DataStore;

/// Pending → Completed with `score`.
pub fn review<S: DataStore>(store: &mut S, id: &str, score: f64) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(position) = next.videos_pending.iter().position(|v| v.id == id) else {
        return noop("review_video", id);
    };
    let pending = next.videos_pending.remove(position);
    let completed = VideoCompleted {
        id: pending.id,
        player: pending.player,
        exercise: pending.exercise,
        score,
        reviewed_on: today(),
        video_url: pending.video_url,
    };
    next.videos_completed.push(completed.clone());

    commit_transition(
        store,
        "review_video",
        id,
        next,
        format!("Reviewed video {} (score {})", id, format_score(score)),
        kinds::VIDEO,
        vec![Entity::CompletedVideo(completed)],
    )
}

/// Pending → Flagged with `reason`.
pub fn flag<S: DataStore>(store: &mut S, id: &str, reason: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(position) = next.videos_pending.iter().position(|v| v.id == id) else {
        return noop("flag_video", id);
    };
    let pending = next.videos_pending.remove(position);
    let flagged = VideoFlagged {
        id: pending.id,
        player: pending.player,
        reason: reason.to_string(),
        flagged_on: today(),
        video_url: pending.video_url,
    };
    next.videos_flagged.push(flagged.clone());

    commit_transition(
        store,
        "flag_video",
        id,
        next,
        format!("Flagged video {}", id),
        kinds::VIDEO,
        vec![Entity::FlaggedVideo(flagged)],
    )
}

/// Flagged → Completed with `score`. The exercise is recorded as `N/A`.
pub fn review_flagged<S: DataStore>(store: &mut S, id: &str, score: f64) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(position) = next.videos_flagged.iter().position(|v| v.id == id) else {
        return noop("review_flagged_video", id);
    };
    let flagged = next.videos_flagged.remove(position);
    let completed = VideoCompleted {
        id: flagged.id,
        player: flagged.player,
        exercise: UNKNOWN_EXERCISE.to_string(),
        score,
        reviewed_on: today(),
        video_url: flagged.video_url,
    };
    next.videos_completed.push(completed.clone());

    commit_transition(
        store,
        "review_flagged_video",
        id,
        next,
        format!(
            "Reviewed flagged video {} (score {})",
            id,
            format_score(score)
        ),
        kinds::VIDEO,
        vec![Entity::CompletedVideo(completed)],
    )
}

/// Drop a video from Flagged without a destination.
pub fn unflag<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(position) = next.videos_flagged.iter().position(|v| v.id == id) else {
        return noop("unflag_video", id);
    };
    let removed = next.videos_flagged.remove(position);

    commit_transition(
        store,
        "unflag_video",
        id,
        next,
        format!("Removed flag from video {}", id),
        kinds::VIDEO,
        vec![Entity::FlaggedVideo(removed)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::{AppState, VideoList};

    fn membership(state: &AppState, id: &str) -> usize {
        state.videos_pending.iter().filter(|v| v.id == id).count()
            + state.videos_completed.iter().filter(|v| v.id == id).count()
            + state.videos_flagged.iter().filter(|v| v.id == id).count()
    }

    #[test]
    fn review_moves_seed_video_to_completed() {
        let mut store = InMemoryStore::seeded();
        let result = review(&mut store, "V001", 8.5).unwrap();

        let state = store.state();
        assert!(state.videos_pending.iter().all(|v| v.id != "V001"));
        let completed = state
            .videos_completed
            .iter()
            .find(|v| v.id == "V001")
            .unwrap();
        assert_eq!(completed.score, 8.5);
        assert_eq!(completed.reviewed_on, today());
        assert_eq!(completed.player, "Ishita");
        assert_eq!(completed.exercise, "Vertical Jump");

        let message = result.notification.unwrap().message;
        assert_eq!(message, "Reviewed video V001 (score 8.5)");
    }

    #[test]
    fn review_requires_pending_membership() {
        let mut store = StoreFixture::new().with_flagged_video("V9", "Ira").build();
        let before = store.state().clone();

        assert!(review(&mut store, "V9", 7.0).unwrap().is_noop());
        assert!(flag(&mut store, "V9", "dup").unwrap().is_noop());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn flag_moves_pending_to_flagged() {
        let mut store = StoreFixture::new().with_pending_video("V1", "Anu").build();
        let result = flag(&mut store, "V1", "Camera shake").unwrap();

        let state = store.state();
        assert_eq!(state.video_location("V1"), Some(VideoList::Flagged));
        let flagged = &state.videos_flagged[0];
        assert_eq!(flagged.reason, "Camera shake");
        assert_eq!(flagged.flagged_on, today());
        assert_eq!(result.notification.unwrap().message, "Flagged video V1");
    }

    #[test]
    fn review_flagged_sets_sentinel_exercise() {
        let mut store = InMemoryStore::seeded();
        review_flagged(&mut store, "V020", 6.0).unwrap();

        let state = store.state();
        assert!(state.videos_flagged.is_empty());
        let completed = state
            .videos_completed
            .iter()
            .find(|v| v.id == "V020")
            .unwrap();
        assert_eq!(completed.exercise, "N/A");
        assert_eq!(completed.score, 6.0);
    }

    #[test]
    fn unflag_deletes_without_destination() {
        let mut store = StoreFixture::new().with_flagged_video("V2", "Ira").build();
        let result = unflag(&mut store, "V2").unwrap();

        assert_eq!(store.state().video_location("V2"), None);
        assert_eq!(
            result.notification.unwrap().message,
            "Removed flag from video V2"
        );
        assert!(unflag(&mut store, "V2").unwrap().is_noop());
    }

    #[test]
    fn videos_stay_partitioned_across_any_sequence() {
        let mut store = InMemoryStore::seeded();
        let ids = ["V001", "V002", "V010", "V020", "V404"];
        for round in 0..3 {
            for (i, id) in ids.iter().enumerate() {
                match (round + i) % 4 {
                    0 => review(&mut store, id, 7.5).unwrap(),
                    1 => flag(&mut store, id, "check").unwrap(),
                    2 => review_flagged(&mut store, id, 8.0).unwrap(),
                    _ => unflag(&mut store, id).unwrap(),
                };
                for other in ids {
                    assert!(membership(store.state(), other) <= 1, "{other} duplicated");
                }
            }
        }
    }

    #[test]
    fn review_flagged_missing_is_noop() {
        let mut store = StoreFixture::new()
            .with_pending_video("V1", "Asha")
            .with_flagged_video("V2", "Ravi")
            .with_notifications(2)
            .build();
        let before = store.state().clone();

        // V1 exists, but only in the pending list.
        assert!(review_flagged(&mut store, "V1", 9.0).unwrap().is_noop());
        assert!(review_flagged(&mut store, "V404", 9.0).unwrap().is_noop());
        assert_eq!(store.state(), &before);
        assert_eq!(store.state().notifications.len(), 2);
        assert_eq!(store.revision(), 0);
    }
}
