//! Opaque, shareable payload carried by actions and events.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased payload value.
///
/// Cloning is cheap (`Arc`-backed): every listener of an emission observes the
/// same underlying value. Payloads are never mutated by this crate; callers must
/// not mutate a payload (through interior mutability) after emitting it.
#[derive(Clone)]
pub struct Payload(Arc<dyn Any + Send + Sync>);

impl Payload {
    /// Wraps a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if the value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Payload(..)")
    }
}
