//! Candidate and recruitment-pipeline progression.
//!
//! Candidates and pipeline entries are separate collections even where their
//! sample ids overlap: advancing candidate `ATH001` never touches pipeline
//! entry `ATH001`, and owners are only tracked on pipeline entries.

use crate::commands::helpers::{commit_transition, noop};
use crate::commands::{CmdResult, Entity};
use crate::error::Result;
use crate::notifications::kinds;
use crate::store::DataStore;

/// Move a candidate to the next status, wrapping after `Selected`.
pub fn advance_candidate<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(candidate) = next.candidates.iter_mut().find(|c| c.id == id) else {
        return noop("advance_candidate", id);
    };
    candidate.status = candidate.status.next();
    let updated = candidate.clone();

    commit_transition(
        store,
        "advance_candidate",
        id,
        next,
        format!("Advanced candidate {} to {}", updated.name, updated.status),
        kinds::CANDIDATE,
        vec![Entity::Candidate(updated)],
    )
}

/// Set the owner of a pipeline entry.
pub fn assign_owner<S: DataStore>(store: &mut S, id: &str, owner: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(entry) = next.pipeline.iter_mut().find(|c| c.id == id) else {
        return noop("assign_candidate_owner", id);
    };
    entry.owner = Some(owner.to_string());
    let updated = entry.clone();

    commit_transition(
        store,
        "assign_candidate_owner",
        id,
        next,
        format!("Assigned owner {} to {}", owner, updated.name),
        kinds::CANDIDATE,
        vec![Entity::PipelineEntry(updated)],
    )
}

/// Move a pipeline entry to the next stage, wrapping after `Selected`.
pub fn advance_pipeline<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(entry) = next.pipeline.iter_mut().find(|c| c.id == id) else {
        return noop("advance_pipeline_stage", id);
    };
    entry.status = entry.status.next();
    let updated = entry.clone();

    commit_transition(
        store,
        "advance_pipeline_stage",
        id,
        next,
        format!("Pipeline: advanced {} to {}", updated.name, updated.status),
        kinds::CANDIDATE,
        vec![Entity::PipelineEntry(updated)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CandidateStatus, PipelineStage};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn advance_candidate_walks_the_cycle() {
        let mut store = InMemoryStore::seeded();
        let mut seen = Vec::new();
        for _ in 0..4 {
            advance_candidate(&mut store, "ATH001").unwrap();
            seen.push(store.state().candidate("ATH001").unwrap().status);
        }
        assert_eq!(
            seen,
            vec![
                CandidateStatus::Interview,
                CandidateStatus::Trials,
                CandidateStatus::Selected,
                CandidateStatus::Shortlisted,
            ]
        );
    }

    #[test]
    fn advance_candidate_leaves_pipeline_alone() {
        let mut store = InMemoryStore::seeded();
        let result = advance_candidate(&mut store, "ATH001").unwrap();

        assert_eq!(
            store.state().pipeline_entry("ATH001").unwrap().status,
            PipelineStage::Screening
        );
        assert_eq!(
            result.notification.unwrap().message,
            "Advanced candidate Diksha to Interview"
        );
    }

    #[test]
    fn advance_candidate_missing_is_noop() {
        let mut store = StoreFixture::new()
            .with_candidate("C1", "Asha", CandidateStatus::Trials)
            .build();
        assert!(advance_candidate(&mut store, "C2").unwrap().is_noop());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn assign_owner_targets_pipeline_only() {
        let mut store = InMemoryStore::seeded();
        let result = assign_owner(&mut store, "ATH001", "Coach Rao").unwrap();

        let entry = store.state().pipeline_entry("ATH001").unwrap();
        assert_eq!(entry.owner.as_deref(), Some("Coach Rao"));
        assert!(store.state().candidate("ATH001").unwrap().owner.is_none());
        assert_eq!(
            result.notification.unwrap().message,
            "Assigned owner Coach Rao to Diksha"
        );
    }

    #[test]
    fn assign_owner_to_candidate_only_id_is_noop() {
        // BDM005 is a candidate but not a pipeline entry.
        let mut store = InMemoryStore::seeded();
        let result = assign_owner(&mut store, "BDM005", "Coach").unwrap();
        assert!(result.is_noop());
    }

    #[test]
    fn advance_pipeline_wraps_to_screening() {
        let mut store = StoreFixture::new()
            .with_pipeline_entry("P1", "Ravi", PipelineStage::Selected)
            .build();
        let result = advance_pipeline(&mut store, "P1").unwrap();

        assert_eq!(
            store.state().pipeline_entry("P1").unwrap().status,
            PipelineStage::Screening
        );
        assert_eq!(
            result.notification.unwrap().message,
            "Pipeline: advanced Ravi to Screening"
        );
    }

    #[test]
    fn advance_pipeline_missing_is_noop() {
        let mut store = StoreFixture::new()
            .with_candidate("P1", "Ravi", CandidateStatus::Trials)
            .with_pipeline_entry("P2", "Meera", PipelineStage::Interview)
            .with_notifications(3)
            .build();
        let before = store.state().clone();

        // P1 is a candidate, not a pipeline entry.
        assert!(advance_pipeline(&mut store, "P1").unwrap().is_noop());
        assert!(advance_pipeline(&mut store, "P404").unwrap().is_noop());
        assert_eq!(store.state(), &before);
        assert_eq!(store.state().notifications.len(), 3);
        assert_eq!(store.revision(), 0);
    }
}
