//! # Host-pumped delivery queue.
//!
//! [`LocalQueue`] stores delivery units until the host drains it with
//! [`LocalQueue::run_pending`], typically once per iteration of an existing UI or
//! render loop. The thread calling `run_pending` is the delivery context.

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;

use super::context::{Deliver, Job};

/// FIFO delivery queue drained by the caller's thread.
#[derive(Default)]
pub struct LocalQueue {
    jobs: Mutex<VecDeque<Job>>,
}

impl LocalQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of units waiting to run.
    pub fn pending(&self) -> usize {
        self.jobs.lock().len()
    }

    /// Runs queued units on the current thread until the queue is empty.
    ///
    /// Units enqueued while draining (e.g. a listener emitting again) run in the
    /// same call. The lock is released before each unit runs.
    ///
    /// Returns the number of units executed.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.jobs.lock().pop_front();
            let Some(job) = next else {
                break;
            };
            job();
            ran += 1;
        }
        ran
    }
}

impl Deliver for LocalQueue {
    fn deliver(&self, job: Job) {
        self.jobs.lock().push_back(job);
    }

    fn name(&self) -> &'static str {
        "LocalQueue"
    }
}

impl fmt::Debug for LocalQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
