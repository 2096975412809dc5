use crate::commands::{CmdMessage, CmdResult, Entity};
use crate::error::Result;
use crate::model::Notification;
use crate::store::{AppState, DataStore};
use chrono::{Local, Utc};
use tracing::debug;
use uuid::Uuid;

/// URL-safe alphabet used for generated ids.
const ID_ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

pub const ENTITY_ID_LEN: usize = 6;
pub const NOTIFICATION_ID_LEN: usize = 8;

/// Random id of `len` characters (at most 16).
pub fn random_id(len: usize) -> String {
    Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(len)
        .map(|b| ID_ALPHABET[(b & 63) as usize] as char)
        .collect()
}

/// Random id that `taken` reports as unused.
pub fn fresh_id(len: usize, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = random_id(len);
        if !taken(&id) {
            return id;
        }
    }
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Current UTC instant, RFC 3339.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Local time of day, `HH:MM:SS`.
pub fn time_of_day() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Build a fresh, unread notification whose id is unique within `state`'s feed.
pub fn new_notification(state: &AppState, message: String, kind: Option<&str>) -> Notification {
    let feed = &state.notifications;
    Notification {
        id: fresh_id(NOTIFICATION_ID_LEN, |id| feed.contains_id(id)),
        message,
        created_at: time_of_day(),
        kind: kind.map(str::to_string),
        read: false,
    }
}

/// Append the notification for this transition to `next` and commit it.
///
/// This is the only way commands write to the store.
pub fn commit_transition<S: DataStore>(
    store: &mut S,
    op: &'static str,
    target: &str,
    mut next: AppState,
    message: String,
    kind: &'static str,
    affected: Vec<Entity>,
) -> Result<CmdResult> {
    let notification = new_notification(&next, message, Some(kind));
    next.notifications.push(notification.clone());
    store.commit(next)?;
    debug!(
        op,
        id = target,
        revision = store.revision(),
        "transition committed"
    );

    let mut result = CmdResult {
        committed: true,
        ..Default::default()
    }
    .with_affected(affected);
    result.add_message(CmdMessage::success(notification.message.clone()));
    result.notification = Some(notification);
    Ok(result)
}

/// Result for a mutation whose target id does not exist.
pub fn noop(op: &'static str, target: &str) -> Result<CmdResult> {
    debug!(op, id = target, "target not found, no-op");
    Ok(CmdResult::default())
}

/// Format a score the way notifications show it (`8.5`, `9`).
pub fn format_score(score: f64) -> String {
    format!("{}", score)
}
