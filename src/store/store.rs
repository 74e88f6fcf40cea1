//! # Embeddable listener registry and event emitter.
//!
//! [`Store`] keeps the ordered set of listeners of one store and fans events out to
//! them through an injected delivery context.
//!
//! ## Architecture
//! ```text
//! emit(event)
//!     │
//!     ├─ lock ─► snapshot listeners ─► unlock
//!     │
//!     ├──► context.deliver(|| listener1.on_store_event(&event))
//!     ├──► context.deliver(|| listener2.on_store_event(&event))
//!     └──► context.deliver(|| listenerN.on_store_event(&event))
//!                               │
//!                               ▼
//!              delivery thread runs units later, FIFO
//! ```
//!
//! ## Rules
//! - **Snapshot semantics**: a listener registered after the snapshot misses the event;
//!   one unregistered after the snapshot still receives it.
//! - **Per-emission order**: units are forwarded in registration order.
//! - **No waiting**: `emit()` returns once units are forwarded, not once listeners ran.
//! - **Lock scope**: the listener lock is never held while delivering or running callbacks.

use std::fmt;
use std::sync::Arc;

use super::members::Members;
use crate::delivery::Deliver;
use crate::events::Event;
use crate::listeners::Listener;

/// Listener registry of a single store.
///
/// Meant to be embedded in [`Storer`](crate::Storer) implementations. Each `Store`
/// has its own lock, so unrelated stores never contend.
pub struct Store {
    listeners: Members<dyn Listener>,
    context: Arc<dyn Deliver>,
}

impl Store {
    /// Creates a store delivering its events through `context`.
    pub fn new(context: Arc<dyn Deliver>) -> Self {
        Self {
            listeners: Members::new(),
            context,
        }
    }

    /// Registers `listener` for event emissions.
    ///
    /// Does nothing if the same `Arc` allocation is already registered.
    /// Returns `true` if the listener was added.
    pub fn register(&self, listener: Arc<dyn Listener>) -> bool {
        let name = listener.name();
        let added = self.listeners.insert(listener);
        if added {
            tracing::debug!(listener = name, "listener registered");
        }
        added
    }

    /// Removes `listener` from event emissions.
    ///
    /// Does nothing if it is not registered. Returns `true` if it was removed.
    pub fn unregister<L: Listener + ?Sized>(&self, listener: &Arc<L>) -> bool {
        let removed = self.listeners.remove(listener);
        if removed {
            tracing::debug!(listener = listener.name(), "listener unregistered");
        }
        removed
    }

    /// Returns `true` if `listener` is registered.
    pub fn contains<L: Listener + ?Sized>(&self, listener: &Arc<L>) -> bool {
        self.listeners.contains(listener)
    }

    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered listeners, in registration order.
    pub fn listeners(&self) -> Vec<Arc<dyn Listener>> {
        self.listeners.snapshot()
    }

    /// Returns the delivery context listeners are notified on.
    pub fn context(&self) -> &Arc<dyn Deliver> {
        &self.context
    }

    /// Emits an event to every currently registered listener.
    ///
    /// One unit per listener is handed to the delivery context, in registration
    /// order. Returns the number of units forwarded.
    pub fn emit(&self, event: Event) -> usize {
        let snapshot = self.listeners.snapshot();
        let forwarded = snapshot.len();

        tracing::trace!(
            event = %event.name,
            seq = event.seq,
            listeners = forwarded,
            context = self.context.name(),
            "emit"
        );

        for listener in snapshot {
            let event = event.clone();
            self.context
                .deliver(Box::new(move || listener.on_store_event(&event)));
        }
        forwarded
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.len())
            .field("context", &self.context.name())
            .finish()
    }
}
