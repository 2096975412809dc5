use crate::commands::helpers::new_notification;
use crate::commands::{CmdResult, Entity};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

/// Prepend a free-form notification to the feed.
pub fn push<S: DataStore>(store: &mut S, message: &str, kind: Option<&str>) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let notification = new_notification(&next, message.to_string(), kind);
    next.notifications.push(notification.clone());
    store.commit(next)?;
    debug!(op = "push_notification", id = %notification.id, "notification pushed");

    Ok(CmdResult {
        affected: vec![Entity::Notification(notification.clone())],
        notification: Some(notification),
        committed: true,
        ..Default::default()
    })
}

/// Mark every notification read. Order and count are unchanged.
pub fn mark_all_read<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut next = store.state().clone();
    let unread = next.notifications.unread_count();
    next.notifications.mark_all_read();
    store.commit(next)?;
    debug!(
        op = "mark_all_notifications_read",
        unread,
        "notifications marked read"
    );

    Ok(CmdResult {
        committed: true,
        ..Default::default()
    })
}
