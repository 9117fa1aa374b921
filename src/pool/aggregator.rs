//! Aggregation of per-worker summaries

use crate::worker::WorkerSummary;

/// Pool-wide totals computed from worker summaries
#[derive(Debug, Default, Clone)]
pub struct PoolSummary {
    /// Number of workers that completed
    pub workers: usize,

    /// Total traces emitted across all workers
    pub total_traces: usize,

    /// Longest single-worker elapsed time
    pub elapsed: Option<std::time::Duration>,

    /// Aggregate traces per second over the longest worker's lifetime
    pub traces_per_second: f64,
}

/// Aggregate worker summaries into pool-wide totals
pub fn aggregate_summaries(summaries: &[WorkerSummary]) -> PoolSummary {
    let total_traces = summaries.iter().map(|s| s.completed).sum();
    let elapsed = summaries.iter().filter_map(|s| s.elapsed()).max();

    let traces_per_second = elapsed
        .map(|d| {
            let secs = d.as_secs_f64();
            if secs > 0.0 {
                total_traces as f64 / secs
            } else {
                0.0
            }
        })
        .unwrap_or(0.0);

    PoolSummary {
        workers: summaries.len(),
        total_traces,
        elapsed,
        traces_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn summary(completed: usize, elapsed: Duration) -> WorkerSummary {
        let started = Instant::now() - elapsed;
        WorkerSummary {
            completed,
            started_at: Some(started),
            ended_at: Some(Instant::now()),
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let aggregated = aggregate_summaries(&[]);
        assert_eq!(aggregated.workers, 0);
        assert_eq!(aggregated.total_traces, 0);
        assert!(aggregated.elapsed.is_none());
        assert_eq!(aggregated.traces_per_second, 0.0);
    }

    #[test]
    fn test_aggregate_totals() {
        let summaries = vec![
            summary(10, Duration::from_millis(100)),
            summary(5, Duration::from_millis(200)),
            summary(7, Duration::from_millis(50)),
        ];

        let aggregated = aggregate_summaries(&summaries);
        assert_eq!(aggregated.workers, 3);
        assert_eq!(aggregated.total_traces, 22);
        assert!(aggregated.elapsed.unwrap() >= Duration::from_millis(200));
        assert!(aggregated.traces_per_second > 0.0);
    }
}
