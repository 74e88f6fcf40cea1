//! # Delivery context trait.
//!
//! A delivery context is the single-consumer execution environment that actually
//! invokes listener callbacks (conventionally a UI thread's work queue). Stores
//! depend only on this sink; they never run listener code themselves.
//!
//! ## Contract
//! - Accept every unit without loss (while open).
//! - Execute each unit exactly once, on the context's own thread.
//! - Preserve submission order (FIFO).
//! - `deliver` must not run the unit inline while the caller holds locks it may need;
//!   implementations queue it instead.

/// Zero-argument unit of work handed to a delivery context.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Sink accepting ordered units of work.
pub trait Deliver: Send + Sync + 'static {
    /// Enqueues a unit for later execution on the context's thread.
    ///
    /// Never blocks on the unit's execution. A closed context drops the unit.
    fn deliver(&self, job: Job);

    /// Returns the context name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
