//! Thread-safe handle to a [`TalentApi`].
//!
//! One mutex guards the whole API, so each operation's state replacement is
//! observed atomically by every reader. Notifications emitted by an operation
//! are broadcast to subscribers while the lock is still held, which keeps the
//! broadcast order identical to the commit order.

use crate::api::TalentApi;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Notification;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

pub struct SharedApi<S: DataStore> {
    inner: Arc<Mutex<TalentApi<S>>>,
    events: broadcast::Sender<Notification>,
}

impl<S: DataStore> Clone for SharedApi<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            events: self.events.clone(),
        }
    }
}

impl SharedApi<InMemoryStore> {
    pub fn seeded() -> Self {
        Self::new(TalentApi::seeded())
    }
}

impl<S: DataStore> SharedApi<S> {
    pub fn new(api: TalentApi<S>) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(api)),
            events,
        }
    }

    /// Receive every notification emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.events.subscribe()
    }

    /// Run a mutating operation and broadcast its notification.
    pub fn dispatch<F>(&self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut TalentApi<S>) -> Result<CmdResult>,
    {
        let mut api = self.inner.lock();
        let result = op(&mut api)?;
        if let Some(notification) = &result.notification {
            // No subscribers is fine.
            let _ = self.events.send(notification.clone());
        }
        Ok(result)
    }

    /// Run a read-only closure against a consistent snapshot.
    pub fn read<T>(&self, f: impl FnOnce(&TalentApi<S>) -> T) -> T {
        f(&self.inner.lock())
    }
}
