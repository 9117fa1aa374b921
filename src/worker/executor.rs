//! Worker execution loop

use std::sync::Arc;
use std::time::{Duration, Instant};

use opentelemetry::global::BoxedTracer;

use crate::config::WorkerConfig;
use crate::emitter::TraceEmitter;
use crate::reporter::Reporter;
use crate::shutdown::{CompletionBarrier, ShutdownCoordinator};

use super::pacer::PacingGate;
use super::summary::WorkerSummary;

/// Worker drives one loop: emit trace -> check stop conditions -> pace -> repeat
///
/// Workers are independent tokio tasks managed by the pool. They share the
/// stop signal and the completion barrier via Arc and may share a tracer
/// with other workers (tracers are assigned round-robin over the supplied
/// set). A worker never blocks on another worker's progress.
pub struct Worker {
    /// Unique worker identifier
    id: usize,

    /// Assigned tracer handle (possibly shared with other workers)
    tracer: Arc<BoxedTracer>,

    /// Span-shape slice of the configuration
    emitter: TraceEmitter,

    /// Minimum inter-iteration delay
    gate: PacingGate,

    /// Completion record sink
    reporter: Arc<dyn Reporter>,

    /// Shared stop signal, checked at the top of every iteration
    shutdown: Arc<ShutdownCoordinator>,

    /// Released exactly once on every exit path
    barrier: Arc<CompletionBarrier>,

    /// Loop bounds (count and deadline)
    config: WorkerConfig,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: usize,
        tracer: Arc<BoxedTracer>,
        config: WorkerConfig,
        reporter: Arc<dyn Reporter>,
        shutdown: Arc<ShutdownCoordinator>,
        barrier: Arc<CompletionBarrier>,
    ) -> Self {
        Self {
            id,
            tracer,
            emitter: TraceEmitter::from_config(&config),
            gate: PacingGate::new(config.pause),
            reporter,
            shutdown,
            barrier,
            config,
        }
    }

    /// Run the worker loop until a stop condition is met
    ///
    /// Emits exactly one completion record and releases the barrier exactly
    /// once, in that order, on every exit path. Returns the summary with
    /// the exact number of completed iterations.
    pub async fn run(self) -> WorkerSummary {
        let mut summary = WorkerSummary::new();
        summary.start();

        tracing::debug!(worker_id = self.id, "worker started");

        // A config with neither bound performs zero iterations rather than
        // looping forever.
        if self.config.is_bounded() {
            let loop_start = Instant::now();

            loop {
                if self.shutdown.is_stopped() {
                    tracing::debug!(worker_id = self.id, "worker observed stop signal");
                    break;
                }
                if self.count_exhausted(&summary) {
                    break;
                }
                if self.deadline_passed(loop_start) {
                    tracing::debug!(worker_id = self.id, "worker reached deadline");
                    break;
                }

                self.emitter.emit(&self.tracer);
                summary.record_trace();

                if self.gate.is_enabled() && !self.count_exhausted(&summary) {
                    // Pause is interruptible: a stop signal cuts it short,
                    // and the loop re-checks the flag before emitting.
                    tokio::select! {
                        biased;

                        _ = self.shutdown.stopped() => {}
                        _ = self.gate.wait() => {}
                    }
                }
            }
        }

        summary.stop();

        // Report before arriving: whoever returns from the barrier wait
        // must already be able to observe this record.
        self.reporter.report(self.id, summary.completed);
        self.barrier.arrive();

        tracing::debug!(
            worker_id = self.id,
            completed = summary.completed,
            elapsed_ms = ?summary.elapsed().map(|d| d.as_millis()),
            "worker finished"
        );

        summary
    }

    /// Whether the count bound forbids another iteration
    fn count_exhausted(&self, summary: &WorkerSummary) -> bool {
        self.config.trace_count > 0 && summary.completed >= self.config.trace_count
    }

    /// Whether the wall-clock bound has elapsed
    fn deadline_passed(&self, loop_start: Instant) -> bool {
        self.config.duration > Duration::ZERO && loop_start.elapsed() >= self.config.duration
    }

    /// Get the worker ID
    pub fn id(&self) -> usize {
        self.id
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("emitter", &self.emitter)
            .field("gate", &self.gate)
            .field("trace_count", &self.config.trace_count)
            .field("duration", &self.config.duration)
            .finish()
    }
}
