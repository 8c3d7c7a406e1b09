#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use markpad::{DocumentEvent, EventBus, InMemoryStorage, ManualClock, Workspace, WorkspaceConfig};

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness. `RUST_LOG` picks the level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub fn millis(ms: i64) -> DateTime<Utc> {
    start() + Duration::milliseconds(ms)
}

/// A session over shared in-memory storage with a clock that only moves when told.
pub struct Harness {
    pub storage: Arc<InMemoryStorage>,
    pub clock: ManualClock,
    pub events: EventLog,
}

impl Harness {
    pub fn new() -> Self {
        init_tracing();
        Self {
            storage: Arc::new(InMemoryStorage::new()),
            clock: ManualClock::new(start()),
            events: EventLog::default(),
        }
    }

    pub fn open(&self) -> Workspace<InMemoryStorage> {
        let bus = EventBus::new();
        self.events.attach(&bus);
        Workspace::open_with_bus(
            self.storage.clone(),
            WorkspaceConfig::default(),
            Arc::new(self.clock.clone()),
            bus,
        )
    }
}

/// Records every event published on a bus.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<DocumentEvent>>>,
}

impl EventLog {
    pub fn attach(&self, bus: &EventBus) {
        let events = self.events.clone();
        bus.subscribe(move |event| events.lock().unwrap().push(event.clone()));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(DocumentEvent::name).collect()
    }

    pub fn all(&self) -> Vec<DocumentEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                DocumentEvent::Notification { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}
