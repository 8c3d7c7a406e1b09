use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use event_emitter_rs::EventEmitter;

use super::event::DocumentEvent;
use super::event_bus::{EventBus, Subscription};

/// Re-publishes bus events on an [`EventEmitter`] under their string names.
///
/// Payloads are the JSON encoding of the [`DocumentEvent`]. Emitter callbacks
/// run on their own threads, so delivery through the bridge is not synchronous.
#[derive(Clone)]
pub struct EmitterBridge {
    emitter: Arc<Mutex<EventEmitter>>,
}

impl EmitterBridge {
    pub fn new() -> Self {
        Self {
            emitter: Arc::new(Mutex::new(EventEmitter::new())),
        }
    }

    /// Register a callback for an event name such as `"document-created"`.
    pub fn on<F>(&self, name: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on(name, listener);
    }

    /// Emit one event. The returned handles finish once every callback has run.
    pub fn forward(&self, event: &DocumentEvent) -> Vec<JoinHandle<()>> {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(event = event.name(), error = %err, "failed to encode event");
                return Vec::new();
            }
        };
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .emit(event.name(), payload)
    }

    /// Forward everything published on `bus` from now on.
    pub fn attach(&self, bus: &EventBus) -> Subscription {
        let bridge = self.clone();
        bus.subscribe(move |event| {
            bridge.forward(event);
        })
    }
}

impl Default for EmitterBridge {
    fn default() -> Self {
        Self::new()
    }
}
