//! Error types used by the storevisor delivery contexts.
//!
//! Registration and emission never fail: duplicates and absent handles are
//! no-ops, and registering anything other than an `Arc` handle is rejected by
//! the compiler. The only fallible surface is the lifecycle of a delivery
//! context, described by [`DeliveryError`].
//!
//! Like the other error enums in this crate it provides helper methods
//! (`as_label`, `as_message`) for logging.

use thiserror::Error;

/// # Errors produced by a delivery context.
///
/// These represent failures of the execution context that runs listener
/// callbacks (spawning its thread, shutting it down, waiting on it).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The OS refused to spawn the delivery thread.
    #[error("failed to spawn delivery thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The context was shut down and no longer accepts work.
    #[error("delivery context is closed")]
    Closed,

    /// A waiting operation (`shutdown`, `flush_blocking`) was called from the delivery
    /// thread itself, which would wait on itself forever.
    #[error("cannot wait on a delivery context from its own thread")]
    CalledFromWorker,

    /// The delivery thread terminated by panic (only possible with panic isolation disabled).
    #[error("delivery thread panicked")]
    WorkerPanicked,
}

impl DeliveryError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use storevisor::DeliveryError;
    ///
    /// assert_eq!(DeliveryError::Closed.as_label(), "delivery_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DeliveryError::Spawn(_) => "delivery_spawn_failed",
            DeliveryError::Closed => "delivery_closed",
            DeliveryError::CalledFromWorker => "delivery_called_from_worker",
            DeliveryError::WorkerPanicked => "delivery_worker_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DeliveryError::Spawn(err) => format!("spawn: {err}"),
            DeliveryError::Closed => "context closed".to_string(),
            DeliveryError::CalledFromWorker => "wait called from worker thread".to_string(),
            DeliveryError::WorkerPanicked => "worker thread panicked".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(DeliveryError::Closed.as_label(), "delivery_closed");
        assert_eq!(
            DeliveryError::CalledFromWorker.as_label(),
            "delivery_called_from_worker"
        );
        assert_eq!(DeliveryError::WorkerPanicked.as_label(), "delivery_worker_panicked");
    }

    #[test]
    fn test_spawn_wraps_io_error() {
        let io = std::io::Error::other("no threads left");
        let err = DeliveryError::from(io);
        assert_eq!(err.as_label(), "delivery_spawn_failed");
        assert!(err.as_message().contains("no threads left"));
        assert!(err.to_string().starts_with("failed to spawn delivery thread"));
    }
}
