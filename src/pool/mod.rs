//! Worker pool: spawning, tracer assignment, and coordinated shutdown
//!
//! The pool owns the run lifecycle: it creates the shutdown coordinator and
//! completion barrier, binds each worker to a tracer (round-robin over the
//! supplied set by default), starts all workers as independent tokio tasks,
//! and blocks until every worker has reported its completion record.

mod aggregator;
mod assignment;
mod builder;
mod executor;

pub use aggregator::{aggregate_summaries, PoolSummary};
pub use assignment::{AssignmentStrategy, RoundRobin};
pub use builder::PoolBuilder;
pub use executor::WorkerPool;

#[cfg(test)]
mod tests;
