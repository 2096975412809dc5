use crate::commands::helpers::{commit_transition, fresh_id, now_timestamp, ENTITY_ID_LEN};
use crate::commands::{CmdResult, Entity};
use crate::error::Result;
use crate::model::{NewPlayer, Player, ACTIVE_TODAY};
use crate::notifications::kinds;
use crate::store::DataStore;

pub fn add<S: DataStore>(store: &mut S, input: NewPlayer) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let player = Player {
        id: fresh_id(ENTITY_ID_LEN, |id| next.player(id).is_some()),
        name: input.name,
        age: input.age,
        location: input.location,
        primary_sport: input.primary_sport,
        join_date: now_timestamp(),
        total_videos: 0,
        average_score: 0.0,
        in_talent_pool: input.in_talent_pool,
        last_active: ACTIVE_TODAY.to_string(),
    };
    next.players.push(player.clone());

    let id = player.id.clone();
    commit_transition(
        store,
        "add_player",
        &id,
        next,
        format!("Added player {}", player.name),
        kinds::PLAYER,
        vec![Entity::Player(player)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    fn input(name: &str) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            age: 19,
            location: "Kochi, Kerala".to_string(),
            primary_sport: "Football".to_string(),
            in_talent_pool: true,
        }
    }

    #[test]
    fn add_sets_fresh_player_defaults() {
        let mut store = InMemoryStore::seeded();
        let result = add(&mut store, input("Meera")).unwrap();

        let player = store.state().players.last().unwrap();
        assert_eq!(player.name, "Meera");
        assert_eq!(player.total_videos, 0);
        assert_eq!(player.average_score, 0.0);
        assert_eq!(player.last_active, "Today");
        assert!(chrono::DateTime::parse_from_rfc3339(&player.join_date).is_ok());
        assert_eq!(result.notification.unwrap().message, "Added player Meera");
    }

    #[test]
    fn player_ids_never_collide() {
        let mut store = InMemoryStore::seeded();
        for i in 0..100 {
            add(&mut store, input(&format!("P{}", i))).unwrap();
        }
        let ids: HashSet<_> = store.state().players.iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), store.state().players.len());
    }
}
