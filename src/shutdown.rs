//! Cooperative shutdown primitives shared by the pool and its workers

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Single-writer broadcast stop signal
///
/// `signal_stop` is idempotent; `is_stopped` is a lock-free load that every
/// worker performs at the top of each iteration. Workers are guaranteed to
/// observe the stop within a bounded number of iterations, not in real time.
#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    stopped: AtomicBool,
    notify: Notify,
}

impl ShutdownCoordinator {
    /// Create a coordinator in the running state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that all workers stop
    ///
    /// Callable any number of times from any task; only the first call has
    /// effect. Never blocks.
    pub fn signal_stop(&self) {
        if !self.stopped.swap(true, Ordering::AcqRel) {
            self.notify.notify_waiters();
        }
    }

    /// Whether the stop signal has been raised
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Wait until the stop signal is raised
    ///
    /// Returns immediately if the signal is already set. Used by workers to
    /// cut a pending pause short.
    pub async fn stopped(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent signal_stop
        // cannot slip between the check and the await.
        notified.as_mut().enable();
        if self.is_stopped() {
            return;
        }
        notified.await;
    }
}

/// Completion barrier released once every worker has arrived
///
/// Initialized to the number of workers; each worker decrements exactly
/// once on its way out, after its completion record has been emitted. The
/// owner's `wait` therefore happens-after every record.
#[derive(Debug)]
pub struct CompletionBarrier {
    remaining: AtomicUsize,
    notify: Notify,
}

impl CompletionBarrier {
    /// Create a barrier expecting `count` arrivals
    pub fn new(count: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(count),
            notify: Notify::new(),
        }
    }

    /// Record one worker's arrival
    pub fn arrive(&self) {
        let prev = self.remaining.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "more arrivals than the barrier was sized for");
        if prev == 1 {
            self.notify.notify_waiters();
        }
    }

    /// Number of arrivals still outstanding
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Wait until every expected arrival has happened
    ///
    /// Returns immediately for a barrier sized at zero.
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.remaining() == 0 {
                return;
            }
            notified.await;
        }
    }
}
