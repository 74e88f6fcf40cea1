//! # Store registry - action broadcast targets.
//!
//! Registry keeps the ordered set of stores that receive dispatched actions:
//! - `register(store)` → store receives every later `dispatch`
//! - `unregister(store)` → store stops receiving actions
//! - `dispatch(action)` → `on_dispatch(action)` on every registered store
//!
//! ## Architecture
//! ```text
//! app ── dispatch(Action) ──► Registry
//!                               ├─ lock ─► snapshot stores ─► unlock
//!                               ├──► store1.on_dispatch(&action) ──► emit(..)
//!                               ├──► store2.on_dispatch(&action)
//!                               └──► storeN.on_dispatch(&action)
//! ```
//!
//! ## Rules
//! - A store is identified by its `Arc` allocation; registering it twice is a no-op.
//! - Unregistering an absent store is a no-op.
//! - The registry lock is never held while store code runs, so `on_dispatch` may
//!   register, unregister or dispatch again.
//! - Broadcast order follows registration order.
//!
//! Registration requires an `Arc` handle, so passing a store by value is rejected at
//! compile time:
//! ```compile_fail
//! use std::sync::Arc;
//! use storevisor::{Action, LocalQueue, Registry, Store, Storer};
//!
//! struct Counter {
//!     store: Store,
//! }
//!
//! impl Storer for Counter {
//!     fn on_dispatch(&self, _action: &Action) {}
//!     fn store(&self) -> &Store {
//!         &self.store
//!     }
//! }
//!
//! let registry = Registry::new();
//! let counter = Counter { store: Store::new(Arc::new(LocalQueue::new())) };
//! registry.register(counter);
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use super::members::Members;
use super::storer::Storer;
use crate::events::Action;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Ordered set of stores receiving dispatched actions.
pub struct Registry {
    stores: Members<dyn Storer>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            stores: Members::new(),
        }
    }

    /// Returns the process-wide registry.
    ///
    /// Prefer an explicitly constructed registry owned by the composition root; the
    /// global one lives for the whole process and is shared by every caller.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Registers `store` as a dispatch target.
    ///
    /// Does nothing if the same `Arc` allocation is already registered.
    /// Returns `true` if the store was added.
    pub fn register(&self, store: Arc<dyn Storer>) -> bool {
        let name = store.name();
        let added = self.stores.insert(store);
        if added {
            tracing::debug!(store = name, "store registered");
        }
        added
    }

    /// Removes `store` from dispatch targets.
    ///
    /// Does nothing if it is not registered. Returns `true` if it was removed.
    pub fn unregister<S: Storer + ?Sized>(&self, store: &Arc<S>) -> bool {
        let removed = self.stores.remove(store);
        if removed {
            tracing::debug!(store = store.name(), "store unregistered");
        }
        removed
    }

    /// Returns `true` if `store` is registered.
    pub fn contains<S: Storer + ?Sized>(&self, store: &Arc<S>) -> bool {
        self.stores.contains(store)
    }

    /// Returns the number of registered stores.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Returns `true` if no store is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered stores, in registration order.
    pub fn stores(&self) -> Vec<Arc<dyn Storer>> {
        self.stores.snapshot()
    }

    /// Broadcasts `action` to every registered store, in registration order.
    ///
    /// Stores registered or removed while the broadcast runs do not affect it.
    /// Returns the number of stores notified.
    pub fn dispatch(&self, action: &Action) -> usize {
        let targets = self.stores.snapshot();
        tracing::debug!(action = %action.name, stores = targets.len(), "dispatch");

        for store in &targets {
            store.on_dispatch(action);
        }
        targets.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("stores", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use crate::delivery::LocalQueue;
    use crate::events::Event;
    use crate::listeners::Listener;
    use crate::store::Store;

    struct StoreTest {
        store: Store,
        dispatched: AtomicUsize,
    }

    impl StoreTest {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                store: Store::new(Arc::new(LocalQueue::new())),
                dispatched: AtomicUsize::new(0),
            })
        }
    }

    impl Storer for StoreTest {
        fn on_dispatch(&self, _action: &Action) {
            self.dispatched.fetch_add(1, Ordering::SeqCst);
        }

        fn store(&self) -> &Store {
            &self.store
        }
    }

    #[test]
    fn test_register_twice_then_unregister() {
        let registry = Registry::new();
        let s = StoreTest::arc();

        assert!(registry.register(s.clone()));
        assert_eq!(registry.len(), 1);
        assert!(!registry.register(s.clone()));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(&s));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_unknown_keeps_size() {
        let registry = Registry::new();
        let known = StoreTest::arc();
        let unknown = StoreTest::arc();
        registry.register(known.clone());

        assert!(!registry.unregister(&unknown));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&known));
    }

    #[test]
    fn test_unregister_through_erased_handle() {
        let registry = Registry::new();
        let s = StoreTest::arc();
        let erased: Arc<dyn Storer> = s.clone();
        registry.register(s.clone());

        assert!(registry.contains(&erased));
        assert!(registry.unregister(&erased));
        assert!(!registry.contains(&s));
    }

    #[test]
    fn test_dispatch_reaches_every_store_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        struct Tagged {
            tag: usize,
            order: Arc<Mutex<Vec<(usize, String)>>>,
            store: Store,
        }
        impl Storer for Tagged {
            fn on_dispatch(&self, action: &Action) {
                self.order.lock().push((self.tag, action.name.to_string()));
            }
            fn store(&self) -> &Store {
                &self.store
            }
        }

        let registry = Registry::new();
        let queue = Arc::new(LocalQueue::new());
        for tag in 0..3 {
            registry.register(Arc::new(Tagged {
                tag,
                order: order.clone(),
                store: Store::new(queue.clone()),
            }));
        }

        assert_eq!(registry.dispatch(&Action::new("Refresh")), 3);
        let expected: Vec<(usize, String)> = (0..3).map(|t| (t, "Refresh".to_string())).collect();
        assert_eq!(*order.lock(), expected);
    }

    #[test]
    fn test_dispatch_emits_to_listeners() {
        let queue = Arc::new(LocalQueue::new());

        struct Echo {
            store: Store,
        }
        impl Storer for Echo {
            fn on_dispatch(&self, action: &Action) {
                let mut ev = Event::new(action.name.clone());
                if let Some(p) = &action.payload {
                    ev = ev.with_shared_payload(p.clone());
                }
                self.emit(ev);
            }
            fn store(&self) -> &Store {
                &self.store
            }
        }

        struct Seen(Mutex<Vec<(String, Option<i32>)>>);
        impl Listener for Seen {
            fn on_store_event(&self, event: &Event) {
                self.0
                    .lock()
                    .push((event.name.to_string(), event.payload::<i32>().copied()));
            }
        }

        let echo = Arc::new(Echo {
            store: Store::new(queue.clone()),
        });
        let seen = Arc::new(Seen(Mutex::new(Vec::new())));
        echo.store().register(seen.clone());

        let registry = Registry::new();
        registry.register(echo.clone());
        registry.dispatch(&Action::new("Ping").with_payload(7_i32));
        queue.run_pending();

        assert_eq!(*seen.0.lock(), vec![("Ping".to_string(), Some(7))]);
    }

    #[test]
    fn test_on_dispatch_may_reenter_registry() {
        struct SelfRemoving {
            registry: Arc<Registry>,
            me: Mutex<Option<Arc<dyn Storer>>>,
            store: Store,
            calls: AtomicUsize,
        }
        impl Storer for SelfRemoving {
            fn on_dispatch(&self, _action: &Action) {
                self.calls.fetch_add(1, Ordering::SeqCst);
                let me = self.me.lock().take();
                if let Some(me) = me {
                    self.registry.unregister(&me);
                }
            }
            fn store(&self) -> &Store {
                &self.store
            }
        }

        let registry = Arc::new(Registry::new());
        let s = Arc::new(SelfRemoving {
            registry: registry.clone(),
            me: Mutex::new(None),
            store: Store::new(Arc::new(LocalQueue::new())),
            calls: AtomicUsize::new(0),
        });
        let erased: Arc<dyn Storer> = s.clone();
        *s.me.lock() = Some(erased.clone());
        registry.register(erased);

        assert_eq!(registry.dispatch(&Action::new("Once")), 1);
        assert_eq!(registry.dispatch(&Action::new("Twice")), 0);
        assert_eq!(s.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_global_registry_is_shared() {
        let s = StoreTest::arc();
        assert!(Registry::global().register(s.clone()));
        assert!(Registry::global().contains(&s));

        Registry::global().dispatch(&Action::new("Global"));
        assert_eq!(s.dispatched.load(Ordering::SeqCst), 1);

        assert!(Registry::global().unregister(&s));
        assert!(!Registry::global().contains(&s));
    }
}
