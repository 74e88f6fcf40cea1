//! Actions broadcast to every registered store.

use std::any::Any;
use std::sync::Arc;

use super::payload::Payload;

/// Opaque intent value handed to [`Storer::on_dispatch`](crate::Storer::on_dispatch).
///
/// Stores usually match on `name` and downcast `payload` to the type they expect.
#[derive(Clone, Debug)]
pub struct Action {
    /// Action name.
    pub name: Arc<str>,
    /// Opaque payload, if any.
    pub payload: Option<Payload>,
}

impl Action {
    /// Creates an action without payload.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            payload: None,
        }
    }

    /// Attaches a payload value.
    #[inline]
    pub fn with_payload<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.payload = Some(Payload::new(value));
        self
    }

    /// Returns the payload if present and of type `T`.
    #[inline]
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().and_then(Payload::downcast_ref::<T>)
    }
}
