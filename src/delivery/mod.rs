//! Delivery contexts: where listener callbacks actually run.
//!
//! Stores never call listeners directly. `Store::emit` wraps each
//! `(listener, event)` pair into a [`Job`] and hands it to the store's [`Deliver`]
//! sink, which runs it later on its own thread.
//!
//! Implementations:
//! - [`UiThread`]: dedicated named thread draining an unbounded FIFO queue;
//! - [`LocalQueue`]: FIFO queue drained by the host loop via `run_pending`.

mod config;
mod context;
mod local;
mod ui_thread;

pub use config::DeliveryConfig;
pub use context::{Deliver, Job};
pub use local::LocalQueue;
pub use ui_thread::UiThread;
