use crate::store::DataStore;
use serde::Serialize;

/// Headline numbers for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_templates: usize,
    pub total_templates: usize,
    /// Sum of assignment counts over all templates.
    pub total_assignments: i64,
    pub exercises: usize,
    pub players: usize,
    pub talent_pool: usize,
    pub candidates: usize,
    pub pending_videos: usize,
    pub completed_videos: usize,
    pub flagged_videos: usize,
    pub unread_notifications: usize,
    /// Mean score over completed reviews; `None` when nothing is reviewed yet.
    pub average_review_score: Option<f64>,
}

pub fn run<S: DataStore>(store: &S) -> DashboardSummary {
    let state = store.state();
    let scores: Vec<f64> = state.videos_completed.iter().map(|v| v.score).collect();
    let average_review_score =
        (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);

    DashboardSummary {
        active_templates: state.templates.iter().filter(|t| t.is_active).count(),
        total_templates: state.templates.len(),
        total_assignments: state
            .templates
            .iter()
            .fold(0i64, |total, t| total.saturating_add(t.assignments)),
        exercises: state.exercises.len(),
        players: state.players.len(),
        talent_pool: state.players.iter().filter(|p| p.in_talent_pool).count(),
        candidates: state.candidates.len(),
        pending_videos: state.videos_pending.len(),
        completed_videos: state.videos_completed.len(),
        flagged_videos: state.videos_flagged.len(),
        unread_notifications: state.notifications.unread_count(),
        average_review_score,
    }
}
