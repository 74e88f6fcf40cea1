//! # LogWriter: simple event logger
//!
//! A minimal listener that reports incoming [`Event`]s through `tracing`.
//! Use it for tests or demos; install a `tracing` subscriber to see the output.
//!
//! ## Example output
//! ```text
//! INFO storevisor: store event seq=3 event="Saved" payload=true
//! WARN storevisor: store event failed seq=4 event="Saved" err=disk full
//! ```

use crate::events::Event;
use crate::listeners::Listener;

/// Event writer listener.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Listener for LogWriter {
    fn on_store_event(&self, e: &Event) {
        match e.error() {
            Some(err) => {
                tracing::warn!(seq = e.seq, event = %e.name, err = %err, "store event failed");
            }
            None => {
                tracing::info!(
                    seq = e.seq,
                    event = %e.name,
                    payload = e.payload.is_some(),
                    "store event"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::delivery::LocalQueue;
    use crate::store::Store;

    #[test]
    fn test_log_writer_receives_events() {
        let queue = Arc::new(LocalQueue::new());
        let store = Store::new(queue.clone());
        let writer = Arc::new(LogWriter::new());
        assert!(store.register(writer.clone()));

        store.emit(Event::new("Saved").with_payload(true));
        store.emit(Event::new("Saved").with_error(std::io::Error::other("disk full")));

        assert_eq!(queue.run_pending(), 2);
        assert_eq!(writer.name(), "LogWriter");
    }
}
