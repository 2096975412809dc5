//! Read-side listings. None of these commit.
//!
//! Text matching is case-insensitive substring matching; a `None` filter field
//! means "all".

use crate::commands::{CmdResult, Entity};
use crate::model::{
    CandidateStatus, Difficulty, Exercise, PipelineStage, Player, Template, TemplateType,
};
use crate::store::{DataStore, VideoList};

#[derive(Debug, Clone, Default)]
pub struct TemplateFilter {
    /// Matched against the template name.
    pub search: Option<String>,
    pub template_type: Option<TemplateType>,
    pub sport: Option<String>,
}

impl TemplateFilter {
    pub fn matches(&self, template: &Template) -> bool {
        contains_ci(&template.name, self.search.as_deref())
            && self.template_type.is_none_or(|t| t == template.template_type)
            && equals_ci(&template.sport, self.sport.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    /// Matched against name or description.
    pub search: Option<String>,
    pub sport: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let search = self.search.as_deref();
        (contains_ci(&exercise.name, search) || contains_ci(&exercise.description, search))
            && equals_ci(&exercise.sport, self.sport.as_deref())
            && self.difficulty.is_none_or(|d| d == exercise.difficulty)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Matched against name or location.
    pub search: Option<String>,
    pub sport: Option<String>,
    /// Substring of the location, e.g. `Kerala`.
    pub state: Option<String>,
    pub talent_pool_only: bool,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        let search = self.search.as_deref();
        (contains_ci(&player.name, search) || contains_ci(&player.location, search))
            && equals_ci(&player.primary_sport, self.sport.as_deref())
            && contains_ci(&player.location, self.state.as_deref())
            && (!self.talent_pool_only || player.in_talent_pool)
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

fn equals_ci(value: &str, expected: Option<&str>) -> bool {
    expected.is_none_or(|e| value.eq_ignore_ascii_case(e.trim()))
}

fn listing(listed: Vec<Entity>) -> CmdResult {
    CmdResult::default().with_listed(listed)
}

pub fn templates<S: DataStore>(store: &S, filter: &TemplateFilter) -> CmdResult {
    listing(
        store
            .state()
            .templates
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .map(Entity::Template)
            .collect(),
    )
}

pub fn exercises<S: DataStore>(store: &S, filter: &ExerciseFilter) -> CmdResult {
    listing(
        store
            .state()
            .exercises
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .map(Entity::Exercise)
            .collect(),
    )
}

pub fn players<S: DataStore>(store: &S, filter: &PlayerFilter) -> CmdResult {
    listing(
        store
            .state()
            .players
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .map(Entity::Player)
            .collect(),
    )
}

pub fn candidates<S: DataStore>(store: &S, status: Option<CandidateStatus>) -> CmdResult {
    listing(
        store
            .state()
            .candidates
            .iter()
            .filter(|c| status.is_none_or(|s| s == c.status))
            .cloned()
            .map(Entity::Candidate)
            .collect(),
    )
}

pub fn pipeline<S: DataStore>(store: &S, stage: Option<PipelineStage>) -> CmdResult {
    listing(
        store
            .state()
            .pipeline
            .iter()
            .filter(|c| stage.is_none_or(|s| s == c.status))
            .cloned()
            .map(Entity::PipelineEntry)
            .collect(),
    )
}

pub fn videos<S: DataStore>(store: &S, list: VideoList) -> CmdResult {
    let state = store.state();
    let listed = match list {
        VideoList::Pending => state
            .videos_pending
            .iter()
            .cloned()
            .map(Entity::PendingVideo)
            .collect(),
        VideoList::Completed => state
            .videos_completed
            .iter()
            .cloned()
            .map(Entity::CompletedVideo)
            .collect(),
        VideoList::Flagged => state
            .videos_flagged
            .iter()
            .cloned()
            .map(Entity::FlaggedVideo)
            .collect(),
    };
    listing(listed)
}

/// Feed entries, newest first, optionally narrowed to one kind or to unread.
pub fn notifications<S: DataStore>(store: &S, kind: Option<&str>, unread_only: bool) -> CmdResult {
    let feed = &store.state().notifications;
    let entries: Vec<_> = match kind {
        Some(kind) => feed.of_kind(kind).collect(),
        None => feed.iter().collect(),
    };
    listing(
        entries
            .into_iter()
            .filter(|n| !unread_only || !n.read)
            .cloned()
            .map(Entity::Notification)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{notifications as feed, templates as template_cmds};
    use crate::store::memory::InMemoryStore;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed.iter().map(Entity::id).collect()
    }

    #[test]
    fn template_filter_by_type_and_search() {
        let store = InMemoryStore::seeded();
        let all = templates(&store, &TemplateFilter::default());
        assert_eq!(all.listed.len(), 5);
        assert!(!all.committed);

        let filter = TemplateFilter {
            search: Some("basketball".into()),
            ..Default::default()
        };
        assert_eq!(ids(&templates(&store, &filter)), vec!["TPL001"]);

        let filter = TemplateFilter {
            template_type: Some(TemplateType::Fitness),
            search: Some("basketball".into()),
            ..Default::default()
        };
        assert!(templates(&store, &filter).listed.is_empty());
    }

    #[test]
    fn exercise_search_covers_description() {
        let store = InMemoryStore::seeded();
        let by_name = ExerciseFilter {
            search: Some("vertical".into()),
            ..Default::default()
        };
        assert!(ids(&exercises(&store, &by_name)).contains(&"EX001"));

        let nothing = ExerciseFilter {
            search: Some("zzz-no-such-drill".into()),
            ..Default::default()
        };
        assert!(exercises(&store, &nothing).listed.is_empty());
    }

    #[test]
    fn player_filter_state_and_pool() {
        let store = InMemoryStore::seeded();
        let everyone = players(&store, &PlayerFilter::default()).listed.len();
        assert_eq!(everyone, 9);

        let pool = players(
            &store,
            &PlayerFilter {
                talent_pool_only: true,
                ..Default::default()
            },
        );
        assert!(pool.listed.len() < everyone);
        for entity in &pool.listed {
            assert!(matches!(entity, Entity::Player(p) if p.in_talent_pool));
        }
    }

    #[test]
    fn candidates_and_pipeline_by_stage() {
        let store = InMemoryStore::seeded();
        assert_eq!(
            ids(&candidates(&store, Some(CandidateStatus::Shortlisted))),
            vec!["ATH001", "BDM005"]
        );
        assert_eq!(
            ids(&pipeline(&store, Some(PipelineStage::Trials))),
            vec!["FTB004"]
        );
        assert_eq!(pipeline(&store, None).listed.len(), 3);
    }

    #[test]
    fn videos_per_list() {
        let store = InMemoryStore::seeded();
        assert_eq!(
            ids(&videos(&store, VideoList::Pending)),
            vec!["V001", "V002"]
        );
        assert_eq!(ids(&videos(&store, VideoList::Flagged)), vec!["V020"]);
    }

    #[test]
    fn notifications_by_kind_and_unread() {
        let mut store = InMemoryStore::seeded();
        template_cmds::assign(&mut store, "TPL001", 1).unwrap();
        feed::mark_all_read(&mut store).unwrap();
        feed::push(&mut store, "Backup finished", Some("system")).unwrap();

        assert_eq!(notifications(&store, None, false).listed.len(), 2);
        let by_kind = notifications(&store, Some("template"), false);
        assert_eq!(by_kind.listed.len(), 1);
        let unread = notifications(&store, None, true);
        assert_eq!(unread.listed.len(), 1);
        let Entity::Notification(latest) = &unread.listed[0] else {
            panic!("expected notification");
        };
        assert_eq!(latest.message, "Backup finished");
    }
}
