//! Notification bus - typed in-process publish/subscribe.
//!
//! The sidebar, the tab strip and the editor never hold references to each
//! other; they react to [`DocumentEvent`]s published here.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Workspace mutations                                      │
//! │  create / rename / move / delete / save_version / ...    │
//! └──────────────────────────────────────────────────────────┘
//!                            │ publish(&DocumentEvent)
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ EventBus                                                 │
//! │  subscribe(f) / subscribe_to(kind, f) / unsubscribe      │
//! └──────────────────────────────────────────────────────────┘
//!            │                               │
//!            ▼                               ▼
//! ┌─────────────────────┐        ┌─────────────────────────┐
//! │ typed listeners     │        │ EmitterBridge           │
//! │ (Fn(&DocumentEvent))│        │ (string-named, JSON)    │
//! └─────────────────────┘        └─────────────────────────┘
//! ```
//!
//! Delivery is synchronous: `publish` returns after every listener that was
//! registered at the moment of the call has run. There is no queue, no retry
//! and no ordering guarantee between listeners beyond registration order.

#[cfg(feature = "emitter")]
mod emitter;
mod event;
mod event_bus;

#[cfg(feature = "emitter")]
pub use emitter::EmitterBridge;
pub use event::{DocumentEvent, EventKind};
pub use event_bus::{EventBus, Subscription};
