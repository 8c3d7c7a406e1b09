use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::event::{DocumentEvent, EventKind};

type Listener = Arc<dyn Fn(&DocumentEvent) + Send + Sync>;

struct Entry {
    id: u64,
    kind: Option<EventKind>,
    listener: Listener,
}

#[derive(Default)]
struct Inner {
    next_id: AtomicU64,
    entries: RwLock<Vec<Entry>>,
}

/// Handle returned by [`EventBus::subscribe`]; pass it to
/// [`EventBus::unsubscribe`] to stop receiving events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
}

/// Synchronous fan-out bus. Clones share the same listener list.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use markpad::{DocumentEvent, EventBus, EventKind};
///
/// let bus = EventBus::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// bus.subscribe_to(EventKind::Notification, move |event| {
///     sink.lock().unwrap().push(event.clone());
/// });
///
/// assert_eq!(bus.publish(&DocumentEvent::notification("saved")), 1);
/// assert_eq!(bus.publish(&DocumentEvent::FileSystemUpdated), 0);
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every event.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&DocumentEvent) + Send + Sync + 'static,
    {
        self.register(None, Arc::new(listener))
    }

    /// Receive only events of one kind.
    pub fn subscribe_to<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn(&DocumentEvent) + Send + Sync + 'static,
    {
        self.register(Some(kind), Arc::new(listener))
    }

    fn register(&self, kind: Option<EventKind>, listener: Listener) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Entry { id, kind, listener });
        Subscription { id }
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        let mut entries = self
            .inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|entry| entry.id != subscription.id);
        entries.len() != before
    }

    /// Deliver `event` to the matching listeners and return how many ran.
    ///
    /// The listener list is copied before dispatch, so listeners may publish
    /// or subscribe from inside their callback. A listener added during
    /// dispatch first sees the next event.
    pub fn publish(&self, event: &DocumentEvent) -> usize {
        let kind = event.kind();
        let listeners: Vec<Listener> = self
            .inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.kind.map_or(true, |k| k == kind))
            .map(|entry| Arc::clone(&entry.listener))
            .collect();

        tracing::trace!(event = event.name(), listeners = listeners.len(), "publishing");
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
