//! tracegen: synthetic distributed-trace generation for load-testing
//! trace-ingestion pipelines
//!
//! This crate provides a pool of independent workers that each emit a
//! bounded or time-bounded stream of traces (one root span plus a fan-out
//! of child spans) against one or more OpenTelemetry tracers:
//!
//! - Worker loop with count, deadline, and cancellation stop conditions
//! - Cooperative shutdown (stop signal + completion barrier)
//! - Round-robin tracer assignment across workers
//! - Exact per-worker completion accounting through a pluggable reporter
//!
//! Tracer construction, CLI parsing, and signal handling belong to the
//! embedding process; this crate only consumes tracer handles and exposes
//! the shutdown coordinator for graceful stop.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod pool;
pub mod reporter;
pub mod shutdown;
pub mod worker;

pub use config::WorkerConfig;
pub use emitter::TraceEmitter;
pub use error::{Error, Result};
pub use pool::{PoolBuilder, PoolSummary, RoundRobin, WorkerPool};
pub use reporter::{Reporter, TracingReporter};
pub use shutdown::{CompletionBarrier, ShutdownCoordinator};
pub use worker::{PacingGate, Worker, WorkerBuilder, WorkerSummary};
