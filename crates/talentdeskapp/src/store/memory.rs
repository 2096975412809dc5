use super::{AppState, DataStore};
use crate::error::Result;
use crate::seed;

/// In-memory state container. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: AppState,
    revision: u64,
}

impl InMemoryStore {
    /// Empty store, mostly useful for tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the fixed sample data.
    pub fn seeded() -> Self {
        Self::with_state(seed::initial_state())
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state, revision: 0 }
    }
}

impl DataStore for InMemoryStore {
    fn state(&self) -> &AppState {
        &self.state
    }

    fn commit(&mut self, next: AppState) -> Result<()> {
        self.state = next;
        self.revision += 1;
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        Candidate, CandidateStatus, Difficulty, Exercise, Notification, PipelineEntry,
        PipelineStage, Template, TemplateType, VideoFlagged, VideoPending,
    };

    pub struct StoreFixture {
        pub state: AppState,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                state: AppState::default(),
            }
        }

        pub fn with_template(mut self, id: &str, name: &str, assignments: i64) -> Self {
            self.state.templates.push(Template {
                id: id.to_string(),
                name: name.to_string(),
                template_type: TemplateType::Assessment,
                sport: "General".to_string(),
                exercises: 3,
                duration: 30,
                assignments,
                avg_score: 7.5,
                created_by: "Fixture".to_string(),
                created_at: "2024-01-01".to_string(),
                is_active: true,
                description: None,
            });
            self
        }

        pub fn with_exercise(mut self, id: &str, name: &str) -> Self {
            self.state.exercises.push(Exercise {
                id: id.to_string(),
                name: name.to_string(),
                sport: "General".to_string(),
                difficulty: Difficulty::Beginner,
                description: format!("{} drill", name),
                metrics: ["Form".to_string()].into_iter().collect(),
                submissions: 10,
                avg_score: 7.0,
                created_by: "Fixture".to_string(),
                created_at: "2024-01-01".to_string(),
                video_url: "https://example.test/clip.mp4".to_string(),
                poster_url: None,
            });
            self
        }

        pub fn with_candidate(mut self, id: &str, name: &str, status: CandidateStatus) -> Self {
            self.state.candidates.push(Candidate {
                id: id.to_string(),
                name: name.to_string(),
                sport: "Athletics".to_string(),
                score: 8.0,
                status,
                owner: None,
            });
            self
        }

        pub fn with_pipeline_entry(mut self, id: &str, name: &str, status: PipelineStage) -> Self {
            self.state.pipeline.push(PipelineEntry {
                id: id.to_string(),
                name: name.to_string(),
                sport: "Athletics".to_string(),
                score: 8.0,
                status,
                owner: None,
            });
            self
        }

        pub fn with_pending_video(mut self, id: &str, player: &str) -> Self {
            self.state.videos_pending.push(VideoPending {
                id: id.to_string(),
                player: player.to_string(),
                exercise: "Sprint".to_string(),
                submitted: "2025-09-20".to_string(),
                video_url: format!("https://example.test/{}.mp4", id),
            });
            self
        }

        pub fn with_flagged_video(mut self, id: &str, player: &str) -> Self {
            self.state.videos_flagged.push(VideoFlagged {
                id: id.to_string(),
                player: player.to_string(),
                reason: "Blurry".to_string(),
                flagged_on: "2025-09-21".to_string(),
                video_url: format!("https://example.test/{}.mp4", id),
            });
            self
        }

        pub fn with_notifications(mut self, count: usize) -> Self {
            for i in 0..count {
                self.state.notifications.push(Notification {
                    id: format!("FIX{:03}", i),
                    message: format!("Fixture event {}", i),
                    created_at: "09:00:00".to_string(),
                    kind: None,
                    read: false,
                });
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_state(self.state)
        }
    }
}
