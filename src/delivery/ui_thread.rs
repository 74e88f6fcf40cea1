//! # Dedicated UI delivery thread.
//!
//! Provides [`UiThread`], a single OS thread draining an unbounded FIFO queue of
//! delivery units. Every store sharing one `UiThread` has its listeners invoked on
//! that thread, one at a time, in the order the units were accepted.
//!
//! ## Architecture
//! ```text
//! Store A ─ emit ─┐
//! Store B ─ emit ─┼──► [unbounded mpsc] ──► worker thread ──► unit() ──► listener.on_store_event()
//! Store N ─ emit ─┘       (FIFO)           ("storevisor-ui")      └────► panic → tracing::error!
//! ```
//!
//! ## Rules
//! - **Non-blocking hand-off**: `deliver()` never waits for the worker.
//! - **Single consumer**: units never run concurrently with each other.
//! - **Panic isolation** (default): a panicking unit is caught and logged; the worker continues.
//! - **Drain on shutdown**: units accepted before `shutdown()` still run.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a listener uses `Mutex<T>` and panics while holding the lock.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::thread::{JoinHandle, ThreadId};

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use super::config::DeliveryConfig;
use super::context::{Deliver, Job};
use crate::error::DeliveryError;

/// Delivery context backed by a dedicated thread.
pub struct UiThread {
    thread_name: String,
    thread_id: ThreadId,
    sender: Mutex<Option<mpsc::UnboundedSender<Job>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl UiThread {
    /// Spawns the worker thread and returns a shareable handle to it.
    ///
    /// # Errors
    /// Returns [`DeliveryError::Spawn`] if the OS refuses to create the thread.
    pub fn spawn(config: DeliveryConfig) -> Result<Arc<Self>, DeliveryError> {
        let (tx, rx) = mpsc::unbounded_channel::<Job>();

        let mut builder = std::thread::Builder::new().name(config.thread_name.clone());
        if let Some(size) = config.stack_size() {
            builder = builder.stack_size(size);
        }

        let name = config.thread_name.clone();
        let isolate = config.isolate_panics;
        let handle = builder.spawn(move || run_worker(rx, &name, isolate))?;
        let thread_id = handle.thread().id();

        tracing::debug!(context = %config.thread_name, "delivery thread started");

        Ok(Arc::new(Self {
            thread_name: config.thread_name,
            thread_id,
            sender: Mutex::new(Some(tx)),
            worker: Mutex::new(Some(handle)),
        }))
    }

    /// Returns the id of the worker thread.
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Returns `true` when called from the worker thread.
    pub fn is_current(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Returns the worker thread name.
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Returns `true` once `shutdown` has closed the queue.
    pub fn is_closed(&self) -> bool {
        self.sender.lock().is_none()
    }

    /// Waits until every unit accepted before this call has run.
    ///
    /// # Errors
    /// Returns [`DeliveryError::Closed`] if the context is shut down or its worker died.
    pub async fn flush(&self) -> Result<(), DeliveryError> {
        let done = self.enqueue_marker()?;
        done.await.map_err(|_| DeliveryError::Closed)
    }

    /// Blocking variant of [`flush`](Self::flush).
    ///
    /// Must not be called from inside an async runtime.
    ///
    /// # Errors
    /// - [`DeliveryError::CalledFromWorker`] when called from the worker thread.
    /// - [`DeliveryError::Closed`] if the context is shut down or its worker died.
    pub fn flush_blocking(&self) -> Result<(), DeliveryError> {
        if self.is_current() {
            return Err(DeliveryError::CalledFromWorker);
        }
        let done = self.enqueue_marker()?;
        done.blocking_recv().map_err(|_| DeliveryError::Closed)
    }

    /// Closes the queue, lets the worker run the remaining units, and joins it.
    ///
    /// Calling it again after a successful shutdown is a no-op.
    ///
    /// # Errors
    /// - [`DeliveryError::CalledFromWorker`] when called from the worker thread.
    /// - [`DeliveryError::WorkerPanicked`] if the worker died by panic.
    pub fn shutdown(&self) -> Result<(), DeliveryError> {
        if self.is_current() {
            return Err(DeliveryError::CalledFromWorker);
        }

        drop(self.sender.lock().take());

        let Some(handle) = self.worker.lock().take() else {
            return Ok(());
        };
        handle.join().map_err(|_| DeliveryError::WorkerPanicked)?;

        tracing::debug!(context = %self.thread_name, "delivery thread joined");
        Ok(())
    }

    fn current_sender(&self) -> Option<mpsc::UnboundedSender<Job>> {
        self.sender.lock().clone()
    }

    fn enqueue_marker(&self) -> Result<oneshot::Receiver<()>, DeliveryError> {
        let (done_tx, done_rx) = oneshot::channel();
        let tx = self.current_sender().ok_or(DeliveryError::Closed)?;
        tx.send(Box::new(move || {
            let _ = done_tx.send(());
        }))
        .map_err(|_| DeliveryError::Closed)?;
        Ok(done_rx)
    }
}

impl Deliver for UiThread {
    fn deliver(&self, job: Job) {
        // Sender is cloned out so a dropped unit never runs destructors under the lock.
        let sent = match self.current_sender() {
            Some(tx) => tx.send(job).is_ok(),
            None => false,
        };
        if !sent {
            tracing::warn!(context = %self.thread_name, "delivery context closed; unit dropped");
        }
    }

    fn name(&self) -> &'static str {
        "UiThread"
    }
}

impl fmt::Debug for UiThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiThread")
            .field("thread_name", &self.thread_name)
            .field("thread_id", &self.thread_id)
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn run_worker(mut rx: mpsc::UnboundedReceiver<Job>, name: &str, isolate: bool) {
    while let Some(job) = rx.blocking_recv() {
        if !isolate {
            job();
            continue;
        }
        if let Err(panic_err) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
            let info = panic_message(&*panic_err);
            tracing::error!(context = %name, info = %info, "delivery unit panicked");
        }
    }
    tracing::debug!(context = %name, "delivery thread stopped");
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn spawn_ui() -> Arc<UiThread> {
        UiThread::spawn(DeliveryConfig::default().with_thread_name("test-ui"))
            .expect("spawn delivery thread")
    }

    #[test]
    fn test_units_run_on_worker_in_order() {
        let ui = spawn_ui();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..10 {
            let seen = Arc::clone(&seen);
            let ui_for_job = Arc::clone(&ui);
            ui.deliver(Box::new(move || {
                assert!(ui_for_job.is_current());
                seen.lock().push(i);
            }));
        }
        ui.flush_blocking().expect("flush");

        assert_eq!(*seen.lock(), (0..10).collect::<Vec<_>>());
        assert!(!ui.is_current());
        ui.shutdown().expect("shutdown");
    }

    #[test]
    fn test_worker_thread_is_named() {
        let ui = spawn_ui();
        let name = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&name);
        ui.deliver(Box::new(move || {
            *slot.lock() = std::thread::current().name().map(str::to_string);
        }));
        ui.flush_blocking().expect("flush");
        assert_eq!(name.lock().as_deref(), Some("test-ui"));
        assert_eq!(ui.thread_name(), "test-ui");
        ui.shutdown().expect("shutdown");
    }

    #[test]
    fn test_panic_is_isolated() {
        let ui = spawn_ui();
        let ran = Arc::new(AtomicUsize::new(0));

        ui.deliver(Box::new(|| panic!("listener exploded")));
        let r = Arc::clone(&ran);
        ui.deliver(Box::new(move || {
            r.fetch_add(1, Ordering::SeqCst);
        }));
        ui.flush_blocking().expect("flush");

        assert_eq!(ran.load(Ordering::SeqCst), 1);
        ui.shutdown().expect("shutdown");
    }

    #[test]
    fn test_panic_without_isolation_kills_worker() {
        let cfg = DeliveryConfig {
            isolate_panics: false,
            ..DeliveryConfig::default()
        };
        let ui = UiThread::spawn(cfg).expect("spawn");

        ui.deliver(Box::new(|| panic!("listener exploded")));
        assert!(matches!(ui.flush_blocking(), Err(DeliveryError::Closed)));
        assert!(matches!(ui.shutdown(), Err(DeliveryError::WorkerPanicked)));
    }

    #[test]
    fn test_shutdown_drains_and_closes() {
        let ui = spawn_ui();
        let ran = Arc::new(AtomicUsize::new(0));
        for _ in 0..5 {
            let r = Arc::clone(&ran);
            ui.deliver(Box::new(move || {
                std::thread::sleep(std::time::Duration::from_millis(1));
                r.fetch_add(1, Ordering::SeqCst);
            }));
        }

        ui.shutdown().expect("shutdown");
        assert_eq!(ran.load(Ordering::SeqCst), 5);
        assert!(ui.is_closed());

        let r = Arc::clone(&ran);
        ui.deliver(Box::new(move || {
            r.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(ran.load(Ordering::SeqCst), 5);
        assert!(matches!(ui.flush_blocking(), Err(DeliveryError::Closed)));
        assert!(ui.shutdown().is_ok());
    }

    #[test]
    fn test_wait_from_worker_is_rejected() {
        let ui = spawn_ui();
        let result = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&result);
        let ui_for_job = Arc::clone(&ui);
        ui.deliver(Box::new(move || {
            let shutdown = ui_for_job.shutdown().map_err(|e| e.as_label());
            let flush = ui_for_job.flush_blocking().map_err(|e| e.as_label());
            *slot.lock() = Some((shutdown, flush));
        }));
        ui.flush_blocking().expect("flush");

        assert_eq!(
            *result.lock(),
            Some((
                Err("delivery_called_from_worker"),
                Err("delivery_called_from_worker")
            ))
        );
        ui.shutdown().expect("shutdown");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_async_flush() {
        let ui = spawn_ui();
        let ran = Arc::new(AtomicUsize::new(0));
        let r = Arc::clone(&ran);
        ui.deliver(Box::new(move || {
            r.fetch_add(1, Ordering::SeqCst);
        }));

        ui.flush().await.expect("flush");
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }
}
