//! # storevisor
//!
//! **Storevisor** is a minimal action-dispatch store registry for Rust.
//!
//! It decouples producers of state-changing intents (actions) from the
//! components that react to state changes (listeners), and guarantees that
//! listener notifications run on one designated execution context
//! (conventionally a UI thread).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                        Registry::dispatch(Action)
//!                                   │
//!            ┌──────────────────────┼──────────────────────┐
//!            ▼                      ▼                      ▼
//!     ┌──────────────┐       ┌──────────────┐       ┌──────────────┐
//!     │   Storer A   │       │   Storer B   │       │   Storer N   │
//!     │ on_dispatch()│       │ on_dispatch()│       │ on_dispatch()│
//!     │  └ Store     │       │  └ Store     │       │  └ Store     │
//!     └──────┬───────┘       └──────┬───────┘       └──────┬───────┘
//!            │ emit(Event)          │ emit(Event)          │ emit(Event)
//!            ▼                      ▼                      ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │            Deliver (UiThread / LocalQueue): FIFO queue            │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                       delivery thread, one unit at a time
//!                     ┌─────────────┼─────────────┐
//!                     ▼             ▼             ▼
//!              listener1.on   listener2.on   listenerN.on
//!              _store_event() _store_event() _store_event()
//! ```
//!
//! ### Emission
//! ```text
//! Store::emit(event)
//!   ├─► lock listeners, copy snapshot, unlock
//!   ├─► for each listener (registration order):
//!   │       context.deliver(|| listener.on_store_event(&event))
//!   └─► return (listeners run later, on the context thread)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                     |
//! |-------------------|---------------------------------------------------------------|----------------------------------------|
//! | **Registry**      | Register stores and broadcast actions to them.                | [`Registry`], [`Action`]               |
//! | **Stores**        | Embeddable listener bookkeeping and event emission.           | [`Storer`], [`Store`], [`Event`]       |
//! | **Listeners**     | React to store events on the delivery thread.                 | [`Listener`]                           |
//! | **Delivery**      | Execution contexts that run listener callbacks in order.      | [`Deliver`], [`UiThread`], [`LocalQueue`] |
//! | **Errors**        | Typed errors for delivery context lifecycle.                  | [`DeliveryError`]                      |
//! | **Configuration** | Delivery thread settings.                                     | [`DeliveryConfig`]                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] listener _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use storevisor::{Action, DeliveryConfig, Event, Listener, Registry, Store, Storer, UiThread};
//!
//! struct TodoStore {
//!     store: Store,
//!     items: Mutex<Vec<String>>,
//! }
//!
//! impl Storer for TodoStore {
//!     fn on_dispatch(&self, action: &Action) {
//!         if &*action.name == "AddTodo" {
//!             if let Some(text) = action.payload::<String>() {
//!                 let count = {
//!                     let mut items = self.items.lock();
//!                     items.push(text.clone());
//!                     items.len()
//!                 };
//!                 self.emit(Event::new("TodoAdded").with_payload(count));
//!             }
//!         }
//!     }
//!
//!     fn store(&self) -> &Store {
//!         &self.store
//!     }
//! }
//!
//! struct Badge(Mutex<usize>);
//!
//! impl Listener for Badge {
//!     fn on_store_event(&self, event: &Event) {
//!         if let Some(count) = event.payload::<usize>() {
//!             *self.0.lock() = *count;
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ui = UiThread::spawn(DeliveryConfig::default())?;
//!     let registry = Registry::new();
//!
//!     let todos = Arc::new(TodoStore { store: Store::new(ui.clone()), items: Mutex::new(Vec::new()) });
//!     registry.register(todos.clone());
//!
//!     let badge = Arc::new(Badge(Mutex::new(0)));
//!     todos.store().register(badge.clone());
//!
//!     registry.dispatch(&Action::new("AddTodo").with_payload("write docs".to_string()));
//!     ui.flush_blocking()?;
//!     assert_eq!(*badge.0.lock(), 1);
//!
//!     ui.shutdown()?;
//!     Ok(())
//! }
//! ```
mod delivery;
mod error;
mod events;
mod listeners;
mod store;

// ---- Public re-exports ----

pub use delivery::{Deliver, DeliveryConfig, Job, LocalQueue, UiThread};
pub use error::DeliveryError;
pub use events::{Action, Event, EventError, Payload};
pub use listeners::Listener;
pub use store::{Registry, Store, Storer};

// Optional: expose a simple built-in logger listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
