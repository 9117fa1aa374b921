//! Builder pattern for Worker construction

use std::sync::Arc;

use opentelemetry::global::BoxedTracer;

use crate::config::WorkerConfig;
use crate::error::{Error, Result};
use crate::reporter::{Reporter, TracingReporter};
use crate::shutdown::{CompletionBarrier, ShutdownCoordinator};

use super::executor::Worker;

/// Builder for creating Worker instances
///
/// The tracer, stop signal, and barrier are mandatory; the configuration
/// defaults to `WorkerConfig::default()` and the reporter to
/// `TracingReporter`.
///
/// # Example
/// ```ignore
/// let worker = WorkerBuilder::new(0)
///     .tracer(tracer)
///     .config(config)
///     .shutdown(shutdown)
///     .barrier(barrier)
///     .build()?;
/// ```
pub struct WorkerBuilder {
    id: usize,
    tracer: Option<Arc<BoxedTracer>>,
    config: WorkerConfig,
    reporter: Arc<dyn Reporter>,
    shutdown: Option<Arc<ShutdownCoordinator>>,
    barrier: Option<Arc<CompletionBarrier>>,
}

impl WorkerBuilder {
    /// Create a new builder with the given worker ID
    pub fn new(id: usize) -> Self {
        Self {
            id,
            tracer: None,
            config: WorkerConfig::default(),
            reporter: Arc::new(TracingReporter),
            shutdown: None,
            barrier: None,
        }
    }

    /// Set the tracer handle
    pub fn tracer(mut self, tracer: Arc<BoxedTracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Set the worker configuration
    pub fn config(mut self, config: WorkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the completion record sink
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Set the shared stop signal
    pub fn shutdown(mut self, shutdown: Arc<ShutdownCoordinator>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    /// Set the shared completion barrier
    pub fn barrier(mut self, barrier: Arc<CompletionBarrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    /// Build the Worker
    ///
    /// # Errors
    /// Returns an error if the tracer, shutdown coordinator, or barrier is
    /// missing.
    pub fn build(self) -> Result<Worker> {
        let tracer = self
            .tracer
            .ok_or_else(|| Error::missing_config("tracer"))?;
        let shutdown = self
            .shutdown
            .ok_or_else(|| Error::missing_config("shutdown"))?;
        let barrier = self
            .barrier
            .ok_or_else(|| Error::missing_config("barrier"))?;

        Ok(Worker::new(
            self.id,
            tracer,
            self.config,
            self.reporter,
            shutdown,
            barrier,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_missing_tracer() {
        let result = WorkerBuilder::new(0)
            .shutdown(Arc::new(ShutdownCoordinator::new()))
            .barrier(Arc::new(CompletionBarrier::new(1)))
            .build();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("tracer"));
    }

    #[test]
    fn test_builder_missing_shutdown() {
        let result = WorkerBuilder::new(0)
            .barrier(Arc::new(CompletionBarrier::new(1)))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_missing_barrier() {
        let result = WorkerBuilder::new(0)
            .shutdown(Arc::new(ShutdownCoordinator::new()))
            .build();

        assert!(result.is_err());
    }
}
