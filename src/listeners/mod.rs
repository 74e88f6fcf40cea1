//! # Store listeners.
//!
//! This module provides the [`Listener`] trait and a built-in implementation
//! for observing events emitted by stores.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Storer::on_dispatch ── emit(Event) ──► Store ──► Deliver (UI thread queue)
//!                                                        │
//!                                                        ├──► ListenerA::on_store_event(&Event)
//!                                                        ├──► ListenerB::on_store_event(&Event)
//!                                                        └──► LogWriter (feature "logging")
//! ```

#[cfg(feature = "logging")]
mod log;
mod listener;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use listener::Listener;
