use crate::commands::helpers::{commit_transition, fresh_id, noop, today, ENTITY_ID_LEN};
use crate::commands::{CmdResult, Entity};
use crate::error::Result;
use crate::model::{Exercise, ExercisePatch, NewExercise};
use crate::notifications::kinds;
use crate::store::DataStore;

pub fn add<S: DataStore>(store: &mut S, input: NewExercise) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let exercise = Exercise {
        id: fresh_id(ENTITY_ID_LEN, |id| next.exercise(id).is_some()),
        name: input.name,
        sport: input.sport,
        difficulty: input.difficulty,
        description: input.description,
        metrics: input.metrics.into_iter().collect(),
        submissions: 0,
        avg_score: 0.0,
        created_by: input.created_by,
        created_at: today(),
        video_url: input.video_url,
        poster_url: input.poster_url,
    };
    next.exercises.push(exercise.clone());

    let id = exercise.id.clone();
    commit_transition(
        store,
        "add_exercise",
        &id,
        next,
        format!("Created exercise '{}'", exercise.name),
        kinds::EXERCISE,
        vec![Entity::Exercise(exercise)],
    )
}

pub fn update<S: DataStore>(store: &mut S, id: &str, patch: &ExercisePatch) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(exercise) = next.exercises.iter_mut().find(|e| e.id == id) else {
        return noop("update_exercise", id);
    };

    let message = format!("Updated exercise '{}'", exercise.name);
    patch.apply(exercise);
    let updated = exercise.clone();

    commit_transition(
        store,
        "update_exercise",
        id,
        next,
        message,
        kinds::EXERCISE,
        vec![Entity::Exercise(updated)],
    )
}

pub fn delete<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let Some(position) = next.exercises.iter().position(|e| e.id == id) else {
        return noop("delete_exercise", id);
    };
    let removed = next.exercises.remove(position);

    commit_transition(
        store,
        "delete_exercise",
        id,
        next,
        format!("Deleted exercise '{}'", removed.name),
        kinds::EXERCISE,
        vec![Entity::Exercise(removed)],
    )
}
