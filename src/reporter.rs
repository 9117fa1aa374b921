//! Completion reporting seam
//!
//! One structured record per worker is the sole externally observable side
//! effect of a run, so the sink sits behind a trait: production code logs
//! through `tracing`, tests substitute an in-memory sink and assert on the
//! exact message.

/// Event sink for per-worker completion records
pub trait Reporter: Send + Sync {
    /// Record that a worker finished after emitting `trace_count` traces
    ///
    /// Called exactly once per worker, on every exit path, before the
    /// completion barrier is released.
    fn report(&self, worker_id: usize, trace_count: usize);
}

/// Reporter that emits the completion record through `tracing`
///
/// Message shape is fixed: `Worker <id> generated <count> traces`, at
/// informational severity, with no additional fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, worker_id: usize, trace_count: usize) {
        tracing::info!("{}", completion_message(worker_id, trace_count));
    }
}

/// The fixed completion message for a worker id and count
///
/// Kept as a function so sinks and tests share one definition of the shape.
pub fn completion_message(worker_id: usize, trace_count: usize) -> String {
    format!("Worker {worker_id} generated {trace_count} traces")
}
