//! Run Gate
//!
//! Bounds concurrent test runs. `cargo test` spawns are expensive, so an
//! exhausted gate answers 429 immediately instead of queueing.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Concurrency cap for test runs
#[derive(Clone)]
pub struct RunGate {
    semaphore: Arc<Semaphore>,
}

impl RunGate {
    pub fn new(max_concurrent_runs: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent_runs)),
        }
    }

    /// Claim a run slot, or None if all slots are taken
    ///
    /// The slot is released when the returned permit drops.
    pub fn try_acquire(&self) -> Option<OwnedSemaphorePermit> {
        self.semaphore.clone().try_acquire_owned().ok()
    }

    /// Free run slots (for monitoring)
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
