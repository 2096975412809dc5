use crate::commands::helpers::{commit_transition, fresh_id, noop, today, ENTITY_ID_LEN};
use crate::commands::{CmdResult, Entity};
use crate::error::Result;
use crate::model::{NewTemplate, Template, TemplatePatch};
use crate::notifications::kinds;
use crate::store::DataStore;

pub fn add<S: DataStore>(store: &mut S, input: NewTemplate) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let template = Template {
        id: fresh_id(ENTITY_ID_LEN, |id| next.template(id).is_some()),
        name: input.name,
        template_type: input.template_type,
        sport: input.sport,
        exercises: input.exercises,
        duration: input.duration,
        assignments: 0,
        avg_score: 0.0,
        created_by: input.created_by,
        created_at: today(),
        is_active: true,
        description: input.description,
    };
    next.templates.push(template.clone());

    let message = format!("Created template '{}'", template.name);
    let id = template.id.clone();
    commit_transition(
        store,
        "add_template",
        &id,
        next,
        message,
        kinds::TEMPLATE,
        vec![Entity::Template(template)],
    )
}

pub fn update<S: DataStore>(store: &mut S, id: &str, patch: &TemplatePatch) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(template) = next.templates.iter_mut().find(|t| t.id == id) else {
        return noop("update_template", id);
    };

    // The notification names the template as it was before the patch.
    let message = format!("Updated template '{}'", template.name);
    patch.apply(template);
    let updated = template.clone();

    commit_transition(
        store,
        "update_template",
        id,
        next,
        message,
        kinds::TEMPLATE,
        vec![Entity::Template(updated)],
    )
}

pub fn duplicate<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(original) = next.template(id).cloned() else {
        return noop("duplicate_template", id);
    };

    let copy = Template {
        id: fresh_id(ENTITY_ID_LEN, |new_id| next.template(new_id).is_some()),
        name: format!("{} Copy", original.name),
        created_at: today(),
        ..original.clone()
    };
    next.templates.push(copy.clone());

    commit_transition(
        store,
        "duplicate_template",
        id,
        next,
        format!("Duplicated template '{}'", original.name),
        kinds::TEMPLATE,
        vec![Entity::Template(copy)],
    )
}

pub fn delete<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(position) = next.templates.iter().position(|t| t.id == id) else {
        return noop("delete_template", id);
    };
    let removed = next.templates.remove(position);

    commit_transition(
        store,
        "delete_template",
        id,
        next,
        format!("Deleted template '{}'", removed.name),
        kinds::TEMPLATE,
        vec![Entity::Template(removed)],
    )
}

/// Add `count` assignments. The count is not validated; negative values
/// subtract. The total saturates at the `i64` bounds.
pub fn assign<S: DataStore>(store: &mut S, id: &str, count: i64) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(template) = next.templates.iter_mut().find(|t| t.id == id) else {
        return noop("assign_template", id);
    };
    template.assignments = template.assignments.saturating_add(count);
    let updated = template.clone();

    commit_transition(
        store,
        "assign_template",
        id,
        next,
        format!("Assigned template '{}' ({:+})", updated.name, count),
        kinds::TEMPLATE,
        vec![Entity::Template(updated)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplateType;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    fn input(name: &str) -> NewTemplate {
        NewTemplate::new(name, TemplateType::Fitness, "General")
    }

    #[test]
    fn add_sets_defaults_and_notifies() {
        let mut store = InMemoryStore::new();
        let result = add(&mut store, input("Core Strength")).unwrap();

        let state = store.state();
        assert_eq!(state.templates.len(), 1);
        let created = &state.templates[0];
        assert_eq!(created.assignments, 0);
        assert_eq!(created.avg_score, 0.0);
        assert!(created.is_active);
        assert_eq!(created.created_at, today());
        assert_eq!(created.id.len(), ENTITY_ID_LEN);

        let notification = result.notification.unwrap();
        assert_eq!(notification.message, "Created template 'Core Strength'");
        assert_eq!(notification.kind.as_deref(), Some("template"));
        assert_eq!(state.notifications.latest(), Some(&notification));
    }

    #[test]
    fn added_ids_are_pairwise_distinct() {
        let mut store = InMemoryStore::new();
        for i in 0..200 {
            add(&mut store, input(&format!("T{}", i))).unwrap();
        }
        let ids: HashSet<_> = store.state().templates.iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn update_merges_patch_and_names_pre_patch_template() {
        let mut store = StoreFixture::new()
            .with_template("T1", "Old Name", 5)
            .build();
        let patch = TemplatePatch {
            name: Some("New Name".into()),
            is_active: Some(false),
            ..Default::default()
        };
        let result = update(&mut store, "T1", &patch).unwrap();

        let template = store.state().template("T1").unwrap();
        assert_eq!(template.name, "New Name");
        assert!(!template.is_active);
        assert_eq!(template.assignments, 5);
        assert_eq!(
            result.notification.unwrap().message,
            "Updated template 'Old Name'"
        );
    }

    #[test]
    fn update_missing_id_changes_nothing() {
        let mut store = StoreFixture::new()
            .with_template("T1", "Keep", 1)
            .with_notifications(3)
            .build();
        let before = store.state().clone();
        let patch = TemplatePatch {
            name: Some("Ghost".into()),
            ..Default::default()
        };

        let result = update(&mut store, "nonexistent", &patch).unwrap();

        assert!(result.is_noop());
        assert!(result.notification.is_none());
        assert_eq!(store.state().templates, before.templates);
        assert_eq!(store.state().notifications, before.notifications);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn duplicate_appends_copy_with_fresh_id() {
        let mut store = StoreFixture::new()
            .with_template("T1", "Battery", 40)
            .build();
        let result = duplicate(&mut store, "T1").unwrap();

        let state = store.state();
        assert_eq!(state.templates.len(), 2);
        let copy = &state.templates[1];
        assert_ne!(copy.id, "T1");
        assert_eq!(copy.name, "Battery Copy");
        assert_eq!(copy.assignments, 40);
        assert_eq!(copy.created_at, today());
        assert_eq!(
            result.notification.unwrap().message,
            "Duplicated template 'Battery'"
        );
    }

    #[test]
    fn duplicate_missing_is_noop() {
        let mut store = StoreFixture::new()
            .with_template("T1", "Battery", 0)
            .build();
        assert!(duplicate(&mut store, "T9").unwrap().is_noop());
        assert_eq!(store.state().templates.len(), 1);
    }

    #[test]
    fn delete_removes_and_names_record() {
        let mut store = StoreFixture::new()
            .with_template("T1", "First", 0)
            .with_template("T2", "Second", 0)
            .build();
        let result = delete(&mut store, "T1").unwrap();

        assert!(store.state().template("T1").is_none());
        assert_eq!(store.state().templates.len(), 1);
        assert_eq!(
            result.notification.unwrap().message,
            "Deleted template 'First'"
        );

        assert!(delete(&mut store, "T1").unwrap().is_noop());
        assert_eq!(store.state().notifications.len(), 1);
    }

    #[test]
    fn assign_on_seed_template() {
        let mut store = InMemoryStore::seeded();
        let result = assign(&mut store, "TPL001", 10).unwrap();

        assert_eq!(store.state().template("TPL001").unwrap().assignments, 99);
        let latest = store.state().notifications.latest().unwrap();
        assert!(latest.message.contains("Basketball Assessment Battery"));
        assert_eq!(Some(latest), result.notification.as_ref());
    }

    #[test]
    fn assign_accepts_negative_counts() {
        let mut store = StoreFixture::new()
            .with_template("T1", "Battery", 5)
            .build();
        assign(&mut store, "T1", -2).unwrap();
        assert_eq!(store.state().template("T1").unwrap().assignments, 3);
    }

    #[test]
    fn assign_saturates_instead_of_overflowing() {
        let mut store = InMemoryStore::seeded();
        assign(&mut store, "TPL001", i64::MAX).unwrap();
        assign(&mut store, "TPL001", i64::MAX).unwrap();
        assert_eq!(
            store.state().template("TPL001").unwrap().assignments,
            i64::MAX
        );
        assert_eq!(store.state().notifications.len(), 2);

        assign(&mut store, "TPL002", i64::MIN).unwrap();
        assign(&mut store, "TPL002", i64::MIN).unwrap();
        assert_eq!(
            store.state().template("TPL002").unwrap().assignments,
            i64::MIN
        );
    }
}
