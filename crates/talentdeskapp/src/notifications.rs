//! Bounded, newest-first notification feed.
//!
//! The feed never grows beyond [`NOTIFICATION_CAP`] entries; pushing onto a full
//! feed evicts the oldest entry. Ordering is always newest first.

use crate::model::Notification;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const NOTIFICATION_CAP: usize = 50;

/// Notification categories emitted by store mutations.
pub mod kinds {
    pub const TEMPLATE: &str = "template";
    pub const EXERCISE: &str = "exercise";
    pub const VIDEO: &str = "video";
    pub const CANDIDATE: &str = "candidate";
    pub const PLAYER: &str = "player";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `notification`, dropping the oldest entries past the cap.
    pub fn push(&mut self, notification: Notification) {
        self.entries.push_front(notification);
        self.entries.truncate(NOTIFICATION_CAP);
    }

    pub fn mark_all_read(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.read = true;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|n| n.id == id)
    }

    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Notification> {
        self.entries
            .iter()
            .filter(move |n| n.kind.as_deref() == Some(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: usize) -> Notification {
        Notification {
            id: format!("N{}", id),
            message: format!("event {}", id),
            created_at: "10:00:00".into(),
            kind: Some(kinds::TEMPLATE.into()),
            read: false,
        }
    }

    #[test]
    fn push_is_newest_first() {
        let mut feed = NotificationFeed::new();
        feed.push(note(1));
        feed.push(note(2));
        let ids: Vec<_> = feed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["N2", "N1"]);
        assert_eq!(feed.latest().unwrap().id, "N2");
    }

    #[test]
    fn push_evicts_oldest_beyond_cap() {
        let mut feed = NotificationFeed::new();
        for i in 0..(NOTIFICATION_CAP + 7) {
            feed.push(note(i));
        }
        assert_eq!(feed.len(), NOTIFICATION_CAP);
        let newest = format!("N{}", NOTIFICATION_CAP + 6);
        assert_eq!(feed.latest().unwrap().id, newest);
        // The first seven pushes were evicted.
        assert!(!feed.contains_id("N6"));
        assert!(feed.contains_id("N7"));
    }

    #[test]
    fn mark_all_read_keeps_order_and_count() {
        let mut feed = NotificationFeed::new();
        for i in 0..3 {
            feed.push(note(i));
        }
        let before: Vec<_> = feed.iter().map(|n| n.id.clone()).collect();
        feed.mark_all_read();
        let after: Vec<_> = feed.iter().map(|n| n.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut feed = NotificationFeed::new();
        feed.push(note(1));
        let json = serde_json::to_value(&feed).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "template");
    }
}
