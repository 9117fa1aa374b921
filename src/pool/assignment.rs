//! Tracer assignment strategies

/// Picks which tracer a worker is bound to
///
/// Kept behind a trait so alternative strategies (random, least-loaded) can
/// replace round-robin without touching the worker loop.
pub trait AssignmentStrategy: Send + Sync {
    /// Index into the tracer set for the given worker
    ///
    /// `tracer_count` is always non-zero; the returned index must be less
    /// than it.
    fn tracer_index(&self, worker_id: usize, tracer_count: usize) -> usize;
}

/// Round-robin assignment: worker `i` gets tracer `i % tracer_count`
///
/// A worker count larger than the tracer set reuses tracers, never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundRobin;

impl AssignmentStrategy for RoundRobin {
    fn tracer_index(&self, worker_id: usize, tracer_count: usize) -> usize {
        worker_id % tracer_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_wraps() {
        let strategy = RoundRobin;
        let assigned: Vec<usize> = (0..5).map(|id| strategy.tracer_index(id, 2)).collect();
        assert_eq!(assigned, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_round_robin_single_tracer() {
        let strategy = RoundRobin;
        for id in 0..4 {
            assert_eq!(strategy.tracer_index(id, 1), 0);
        }
    }
}
