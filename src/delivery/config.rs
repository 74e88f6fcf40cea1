//! # Delivery context configuration.
//!
//! Provides [`DeliveryConfig`], the settings used by [`UiThread::spawn`](crate::UiThread::spawn).
//!
//! ## Sentinel values
//! - `stack_size = 0` → platform default stack size

/// Configuration for a dedicated delivery thread.
///
/// ## Field semantics
/// - `thread_name`: OS thread name (shown in debuggers and panic messages)
/// - `stack_size`: Worker stack size in bytes (`0` = platform default)
/// - `isolate_panics`: Catch panicking units and keep the worker alive
///
/// ## Notes
/// All fields are public for flexibility. Prefer using helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct DeliveryConfig {
    /// Name given to the worker thread.
    pub thread_name: String,

    /// Worker stack size in bytes.
    ///
    /// - `0` = platform default
    /// - `n > 0` = explicit stack size
    pub stack_size: usize,

    /// Whether a panicking unit is caught and logged instead of killing the worker.
    ///
    /// With isolation disabled a panicking listener terminates the worker; later
    /// units are dropped and [`UiThread::shutdown`](crate::UiThread::shutdown) returns
    /// [`DeliveryError::WorkerPanicked`](crate::DeliveryError::WorkerPanicked).
    pub isolate_panics: bool,
}

impl DeliveryConfig {
    /// Returns the configured stack size as an `Option`.
    ///
    /// - `None` → platform default
    /// - `Some(n)` → explicit size
    #[inline]
    pub fn stack_size(&self) -> Option<usize> {
        if self.stack_size == 0 {
            None
        } else {
            Some(self.stack_size)
        }
    }

    /// Returns a copy with a different thread name.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

impl Default for DeliveryConfig {
    /// Default configuration:
    ///
    /// - `thread_name = "storevisor-ui"`
    /// - `stack_size = 0` (platform default)
    /// - `isolate_panics = true`
    fn default() -> Self {
        Self {
            thread_name: "storevisor-ui".to_string(),
            stack_size: 0,
            isolate_panics: true,
        }
    }
}
