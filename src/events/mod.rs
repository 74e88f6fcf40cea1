//! Actions and events: the values flowing through stores.
//!
//! ## Contents
//! - [`Action`] opaque intent broadcast to every registered store
//! - [`Event`], [`EventError`] named notification a store emits to its listeners
//! - [`Payload`] type-erased value shared by both
//!
//! ## Quick reference
//! - **Producers of actions**: application code calling `Registry::dispatch`.
//! - **Producers of events**: `Storer::on_dispatch` implementations calling `emit`.
//! - **Consumers of events**: `Listener::on_store_event`, on the delivery context thread.

mod action;
mod event;
mod payload;

pub use action::Action;
pub use event::{Event, EventError};
pub use payload::Payload;
