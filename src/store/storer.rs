//! # Store trait.
//!
//! [`Storer`] is what the [`Registry`](crate::Registry) broadcasts actions to. A
//! concrete store embeds a [`Store`] (listener bookkeeping + emission) and adds its
//! own state and reaction logic in [`Storer::on_dispatch`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI64, Ordering};
//! use storevisor::{Action, Event, LocalQueue, Registry, Store, Storer};
//!
//! struct CounterStore {
//!     store: Store,
//!     value: AtomicI64,
//! }
//!
//! impl Storer for CounterStore {
//!     fn on_dispatch(&self, action: &Action) {
//!         if &*action.name == "Add" {
//!             let by = action.payload::<i64>().copied().unwrap_or(1);
//!             let now = self.value.fetch_add(by, Ordering::SeqCst) + by;
//!             self.emit(Event::new("Changed").with_payload(now));
//!         }
//!     }
//!
//!     fn store(&self) -> &Store {
//!         &self.store
//!     }
//! }
//!
//! let queue = Arc::new(LocalQueue::new());
//! let counter = Arc::new(CounterStore { store: Store::new(queue.clone()), value: AtomicI64::new(0) });
//!
//! let registry = Registry::new();
//! registry.register(counter.clone());
//! registry.dispatch(&Action::new("Add").with_payload(5_i64));
//! assert_eq!(counter.value.load(Ordering::SeqCst), 5);
//! ```

use std::sync::Arc;

use super::store::Store;
use crate::events::{Action, Event};
use crate::listeners::Listener;

/// A stateful component reacting to actions and emitting events to its listeners.
///
/// Stores are subject to concurrency: `on_dispatch` may run on several threads at
/// once. Implementations must protect their mutable fields.
pub trait Storer: Send + Sync + 'static {
    /// Reacts to a dispatched action.
    ///
    /// Called for every action broadcast by a registry this store is registered with.
    fn on_dispatch(&self, action: &Action);

    /// Returns the embedded listener registry.
    fn store(&self) -> &Store;

    /// Registers `listener` for event emissions. See [`Store::register`].
    fn register(&self, listener: Arc<dyn Listener>) -> bool {
        self.store().register(listener)
    }

    /// Removes `listener` from event emissions. See [`Store::unregister`].
    fn unregister(&self, listener: &Arc<dyn Listener>) -> bool {
        self.store().unregister(listener)
    }

    /// Emits an event to every registered listener. See [`Store::emit`].
    fn emit(&self, event: Event) -> usize {
        self.store().emit(event)
    }

    /// Returns the store name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
