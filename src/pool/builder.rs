//! Builder pattern for WorkerPool construction

use std::sync::Arc;

use opentelemetry::global::BoxedTracer;

use crate::config::WorkerConfig;
use crate::error::{Error, Result};
use crate::reporter::{Reporter, TracingReporter};
use crate::shutdown::ShutdownCoordinator;

use super::assignment::{AssignmentStrategy, RoundRobin};
use super::executor::WorkerPool;

/// Builder for creating a WorkerPool with proper validation
///
/// # Example
///
/// ```ignore
/// let pool = PoolBuilder::new()
///     .config(config)
///     .worker_count(5)
///     .tracers(tracers)
///     .build()?;
///
/// let summaries = pool.run().await?;
/// ```
pub struct PoolBuilder {
    config: WorkerConfig,
    worker_count: usize,
    tracers: Vec<Arc<BoxedTracer>>,
    reporter: Arc<dyn Reporter>,
    assignment: Arc<dyn AssignmentStrategy>,
}

impl PoolBuilder {
    /// Create a new pool builder with default configuration
    pub fn new() -> Self {
        Self {
            config: WorkerConfig::default(),
            worker_count: 1,
            tracers: Vec::new(),
            reporter: Arc::new(TracingReporter),
            assignment: Arc::new(RoundRobin),
        }
    }

    /// Set the worker configuration
    pub fn config(mut self, config: WorkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of concurrent workers
    pub fn worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    /// Set the tracer set assigned to workers
    pub fn tracers(mut self, tracers: Vec<Arc<BoxedTracer>>) -> Self {
        self.tracers = tracers;
        self
    }

    /// Add a single tracer to the set
    pub fn tracer(mut self, tracer: Arc<BoxedTracer>) -> Self {
        self.tracers.push(tracer);
        self
    }

    /// Set the completion record sink
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Set the tracer assignment strategy
    pub fn assignment(mut self, assignment: Arc<dyn AssignmentStrategy>) -> Self {
        self.assignment = assignment;
        self
    }

    /// Build the pool
    ///
    /// # Errors
    ///
    /// Returns an error if the worker count is zero or the tracer set is
    /// empty. Both are detected here, before any task starts.
    pub fn build(self) -> Result<WorkerPool> {
        if self.worker_count == 0 {
            return Err(Error::config("worker count must be at least 1"));
        }
        if self.tracers.is_empty() {
            return Err(Error::config("tracer set must not be empty"));
        }

        Ok(WorkerPool {
            config: self.config,
            worker_count: self.worker_count,
            tracers: self.tracers,
            reporter: self.reporter,
            assignment: self.assignment,
            shutdown: Arc::new(ShutdownCoordinator::new()),
        })
    }
}

impl Default for PoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}
