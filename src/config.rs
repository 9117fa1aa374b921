//! Worker configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-worker generation configuration
///
/// Defines how many traces each worker emits, how they are shaped, and how
/// iterations are paced. A zero `trace_count` means "unbounded by count";
/// a zero `duration` means "unbounded by time". When both are zero the
/// worker performs no iterations at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Iteration upper bound per worker (0 = unbounded)
    pub trace_count: usize,

    /// Wall-clock upper bound per worker (0 = unbounded)
    pub duration: Duration,

    /// Minimum delay between trace iterations
    pub pause: Duration,

    /// Service label attached to every emitted span
    pub service_name: String,

    /// Tag every trace with a debug marker
    pub debug: bool,

    /// Tag every trace as exempt from downstream sampling/rate limiting
    pub firehose: bool,

    /// Number of child spans nested under each trace's root span
    pub child_span_count: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            trace_count: 1,
            duration: Duration::ZERO,
            pause: Duration::ZERO,
            service_name: "tracegen".to_string(),
            debug: false,
            firehose: false,
            child_span_count: 1,
        }
    }
}

impl WorkerConfig {
    /// Create a config targeting a fixed number of traces per worker
    pub fn new(trace_count: usize) -> Self {
        Self {
            trace_count,
            ..Default::default()
        }
    }

    /// Set the wall-clock bound
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the minimum inter-iteration pause
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Set the service label
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Enable or disable the debug marker
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable the firehose marker
    pub fn with_firehose(mut self, firehose: bool) -> Self {
        self.firehose = firehose;
        self
    }

    /// Set the number of child spans per trace
    pub fn with_child_span_count(mut self, count: usize) -> Self {
        self.child_span_count = count;
        self
    }

    /// Whether any stop bound is configured
    ///
    /// An unbounded config (count and duration both zero) produces no work.
    pub fn is_bounded(&self) -> bool {
        self.trace_count > 0 || self.duration > Duration::ZERO
    }
}
