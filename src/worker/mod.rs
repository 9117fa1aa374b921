//! Worker module: the trace-emission loop
//!
//! The Worker is the core execution unit in tracegen, responsible for the
//! simple but critical loop: **emit -> account -> pace -> repeat**.
//!
//! Each Worker is an independent tokio task that:
//!
//! 1. Checks the shared stop signal
//! 2. Checks its count and wall-clock bounds
//! 3. Emits one trace (root span plus child fan-out) via its tracer
//! 4. Applies the pacing gate between iterations
//! 5. On exit, reports its exact completed-iteration count and releases
//!    the completion barrier
//!
//! # Example
//!
//! ```ignore
//! use tracegen::worker::WorkerBuilder;
//!
//! let worker = WorkerBuilder::new(0)
//!     .tracer(tracer)
//!     .config(config)
//!     .shutdown(shutdown)
//!     .barrier(barrier)
//!     .build()?;
//!
//! let summary = worker.run().await;
//! println!("completed: {}", summary.completed);
//! ```

mod builder;
mod executor;
mod pacer;
mod summary;

pub use builder::WorkerBuilder;
pub use executor::Worker;
pub use pacer::PacingGate;
pub use summary::WorkerSummary;
