//! Typed change notifications. Listeners get the collection kind and,
//! where one exists, the id of the record that changed, so they can
//! re-read one record instead of a whole collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Users,
    Posts,
    Session,
}

#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub id: Option<String>,
}

impl ChangeEvent {
    pub fn users(id: &str) -> Self {
        ChangeEvent { kind: ChangeKind::Users, id: Some(id.to_string()) }
    }

    pub fn posts(id: &str) -> Self {
        ChangeEvent { kind: ChangeKind::Posts, id: Some(id.to_string()) }
    }

    pub fn session(id: Option<&str>) -> Self {
        ChangeEvent { kind: ChangeKind::Session, id: id.map(str::to_string) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Callback = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Synchronous fan-out registry. Publishing runs every callback on the
/// caller's thread before returning; delivery is fire-and-forget.
/// Callbacks are cloned out of the registry before they run, so a
/// callback may subscribe or unsubscribe without deadlocking.
pub struct EventBus {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(u64, Callback)>>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus {
            next_id: AtomicU64::new(0),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self.subscribers.lock().expect("event bus lock poisoned");
        subscribers.push((id, Arc::new(callback)));
        SubscriberId(id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        let mut subscribers = self.subscribers.lock().expect("event bus lock poisoned");
        subscribers.retain(|(sub_id, _)| *sub_id != id.0);
    }

    pub fn publish(&self, event: &ChangeEvent) {
        trace!(kind = ?event.kind, id = ?event.id, "publishing change event");
        let callbacks: Vec<Callback> = {
            let subscribers = self.subscribers.lock().expect("event bus lock poisoned");
            subscribers.iter().map(|(_, callback)| callback.clone()).collect()
        };
        for callback in callbacks {
            callback(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
