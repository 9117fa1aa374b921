//! Per-worker completion accounting

use std::time::Instant;

/// What one worker actually did
///
/// `completed` always equals the number of full trace-emission iterations
/// performed, regardless of which stop condition ended the loop.
#[derive(Debug, Default, Clone)]
pub struct WorkerSummary {
    /// Number of complete trace-emission iterations
    pub completed: usize,

    /// Loop start time
    pub started_at: Option<Instant>,

    /// Loop end time
    pub ended_at: Option<Instant>,
}

impl WorkerSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the loop start time
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Record the loop end time
    pub fn stop(&mut self) {
        self.ended_at = Some(Instant::now());
    }

    /// Record one completed trace iteration
    pub fn record_trace(&mut self) {
        self.completed += 1;
    }

    /// Elapsed time since the loop started
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        self.started_at.map(|start| {
            self.ended_at
                .map(|end| end.duration_since(start))
                .unwrap_or_else(|| start.elapsed())
        })
    }

    /// Traces emitted per second over the loop's lifetime
    pub fn traces_per_second(&self) -> f64 {
        self.elapsed()
            .map(|d| {
                let secs = d.as_secs_f64();
                if secs > 0.0 {
                    self.completed as f64 / secs
                } else {
                    0.0
                }
            })
            .unwrap_or(0.0)
    }
}
