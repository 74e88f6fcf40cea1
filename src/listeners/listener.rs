//! # Store listener trait.
//!
//! Provides [`Listener`], the extension point for plugging UI components (or
//! anything else reacting to state changes) into a store.
//!
//! ## Architecture
//! ```text
//! Store::emit(event) ──► snapshot ──► [delivery context queue] ──► listener.on_store_event()
//!                                       (one unit per listener)      (context thread, FIFO)
//! ```
//!
//! ## Rules
//! - Callbacks run on the store's delivery context thread, never on the emitting thread
//!   (unless the context is a [`LocalQueue`](crate::LocalQueue) pumped by that thread).
//! - Units are executed one at a time, in the order the context received them.
//! - A listener is identified by its `Arc` allocation: register the same `Arc` twice and
//!   it is stored once; two `Arc`s around equal values are two listeners.
//! - Callbacks may register/unregister/emit on any store; no lock is held while they run.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use storevisor::{Event, Listener, LocalQueue, Store};
//!
//! #[derive(Default)]
//! struct Counter(AtomicU64);
//!
//! impl Listener for Counter {
//!     fn on_store_event(&self, _event: &Event) {
//!         self.0.fetch_add(1, Ordering::SeqCst);
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//!
//! let queue = Arc::new(LocalQueue::new());
//! let store = Store::new(queue.clone());
//! let counter = Arc::new(Counter::default());
//! store.register(counter.clone());
//!
//! store.emit(Event::new("Tick"));
//! queue.run_pending();
//! assert_eq!(counter.0.load(Ordering::SeqCst), 1);
//! ```

use crate::events::Event;

/// Subscriber notified of a store's events.
///
/// ### Implementation requirements
/// - Keep callbacks short: they share one thread with every other listener of the context.
/// - Handle errors internally; do not panic. Panic isolation is the delivery
///   context's concern (see [`DeliveryConfig::isolate_panics`](crate::DeliveryConfig::isolate_panics)).
/// - Protect mutable fields: the listener is shared between the registering thread and
///   the delivery thread.
pub trait Listener: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// Called from the delivery context, not in the emitting context.
    fn on_store_event(&self, event: &Event);

    /// Returns the listener name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
