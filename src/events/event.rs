//! # Events emitted by stores to their listeners.
//!
//! An [`Event`] is a named notification with an optional opaque payload and an
//! optional error. It is immutable once constructed; every listener of an
//! emission receives a clone sharing the same payload and error.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore construction order when events from different emissions interleave.
//!
//! ## Example
//! ```rust
//! use storevisor::Event;
//!
//! let ev = Event::new("Saved")
//!     .with_payload(42_u32)
//!     .with_error(std::io::Error::other("disk full"));
//!
//! assert_eq!(&*ev.name, "Saved");
//! assert_eq!(ev.payload::<u32>(), Some(&42));
//! assert_eq!(ev.error().map(|e| e.to_string()).as_deref(), Some("disk full"));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use super::payload::Payload;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Shared error attached to an event.
pub type EventError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Store event with optional payload and error.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
#[derive(Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event name, chosen by the emitting store.
    pub name: Arc<str>,
    /// Opaque payload, if any.
    pub payload: Option<Payload>,
    /// Error describing a failed operation, if any.
    pub error: Option<EventError>,
}

impl Event {
    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            payload: None,
            error: None,
        }
    }

    /// Attaches a payload value.
    #[inline]
    pub fn with_payload<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.payload = Some(Payload::new(value));
        self
    }

    /// Attaches an already wrapped payload (e.g. forwarded from an action).
    #[inline]
    pub fn with_shared_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attaches an error.
    #[inline]
    pub fn with_error<E>(mut self, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(err));
        self
    }

    /// Returns the payload if present and of type `T`.
    #[inline]
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().and_then(Payload::downcast_ref::<T>)
    }

    /// Returns the attached error, if any.
    #[inline]
    pub fn error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("seq", &self.seq)
            .field("name", &self.name)
            .field("payload", &self.payload)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .finish()
    }
}
