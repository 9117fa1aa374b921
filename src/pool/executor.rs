//! Worker pool execution logic

use std::sync::Arc;

use opentelemetry::global::BoxedTracer;

use crate::config::WorkerConfig;
use crate::error::Result;
use crate::reporter::Reporter;
use crate::shutdown::{CompletionBarrier, ShutdownCoordinator};
use crate::worker::{WorkerBuilder, WorkerSummary};

use super::aggregator::aggregate_summaries;
use super::assignment::AssignmentStrategy;

/// WorkerPool manages the generation run
///
/// Spawns one worker task per producer, assigns tracers over the supplied
/// set, and coordinates cooperative shutdown. Use `PoolBuilder` for
/// construction and validation.
pub struct WorkerPool {
    pub(crate) config: WorkerConfig,
    pub(crate) worker_count: usize,
    pub(crate) tracers: Vec<Arc<BoxedTracer>>,
    pub(crate) reporter: Arc<dyn Reporter>,
    pub(crate) assignment: Arc<dyn AssignmentStrategy>,
    pub(crate) shutdown: Arc<ShutdownCoordinator>,
}

impl WorkerPool {
    /// The shared stop signal
    ///
    /// Hand this to a signal handler or any other owner that needs to
    /// trigger a graceful stop while `run` is pending.
    pub fn shutdown_coordinator(&self) -> Arc<ShutdownCoordinator> {
        Arc::clone(&self.shutdown)
    }

    /// Request that all workers stop after their current iteration
    pub fn signal_stop(&self) {
        self.shutdown.signal_stop();
    }

    /// The worker configuration
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Run the generation
    ///
    /// Starts all workers concurrently, blocks until every worker has
    /// reported and released the completion barrier, and returns the
    /// per-worker summaries. Returning from this call happens-after every
    /// worker's completion record.
    pub async fn run(&self) -> Result<Vec<WorkerSummary>> {
        let barrier = Arc::new(CompletionBarrier::new(self.worker_count));
        let mut handles = Vec::with_capacity(self.worker_count);

        tracing::info!(
            workers = self.worker_count,
            tracers = self.tracers.len(),
            trace_count = self.config.trace_count,
            duration = ?self.config.duration,
            "starting trace generation"
        );

        for worker_id in 0..self.worker_count {
            let tracer_idx = self
                .assignment
                .tracer_index(worker_id, self.tracers.len());

            let worker = WorkerBuilder::new(worker_id)
                .tracer(Arc::clone(&self.tracers[tracer_idx]))
                .config(self.config.clone())
                .reporter(Arc::clone(&self.reporter))
                .shutdown(Arc::clone(&self.shutdown))
                .barrier(Arc::clone(&barrier))
                .build()?;

            handles.push(tokio::spawn(worker.run()));
        }

        // All completion records exist once the barrier opens
        barrier.wait().await;

        let mut summaries = Vec::with_capacity(handles.len());
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::error!(worker_id, error = %e, "worker task panicked");
                }
            }
        }

        let aggregated = aggregate_summaries(&summaries);
        tracing::info!(
            total_traces = aggregated.total_traces,
            elapsed_secs = aggregated.elapsed.map(|d| d.as_secs_f64()),
            traces_per_second = aggregated.traces_per_second,
            "trace generation complete"
        );

        Ok(summaries)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("config", &self.config)
            .field("worker_count", &self.worker_count)
            .field("tracer_count", &self.tracers.len())
            .finish()
    }
}
