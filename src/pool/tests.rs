//! Tests for the WorkerPool module

use super::builder::PoolBuilder;
use crate::config::WorkerConfig;
use crate::reporter::{completion_message, Reporter};

use opentelemetry::global::BoxedTracer;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracerProvider};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Capturing reporter
// ============================================================================

#[derive(Default)]
struct CapturingReporter {
    records: Mutex<Vec<String>>,
}

impl CapturingReporter {
    fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

impl Reporter for CapturingReporter {
    fn report(&self, worker_id: usize, trace_count: usize) {
        self.records
            .lock()
            .unwrap()
            .push(completion_message(worker_id, trace_count));
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn in_memory_tracer() -> (Arc<BoxedTracer>, InMemorySpanExporter) {
    let exporter = InMemorySpanExporter::default();
    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(exporter.clone())
        .build();
    let tracer = Arc::new(BoxedTracer::new(Box::new(provider.tracer("in-memory"))));
    (tracer, exporter)
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_pool_rejects_zero_workers() {
    let (tracer, _exporter) = in_memory_tracer();
    let result = PoolBuilder::new().worker_count(0).tracer(tracer).build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("worker count"));
}

#[test]
fn test_pool_rejects_empty_tracer_set() {
    let result = PoolBuilder::new().worker_count(3).build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("tracer set"));
}

// ============================================================================
// Run tests
// ============================================================================

#[tokio::test]
async fn test_pool_run_all_workers_report() {
    let reporter = Arc::new(CapturingReporter::default());
    let (tracer, exporter) = in_memory_tracer();

    let pool = PoolBuilder::new()
        .config(WorkerConfig::new(4).with_child_span_count(1))
        .worker_count(3)
        .tracer(tracer)
        .reporter(reporter.clone())
        .build()
        .expect("failed to build pool");

    let summaries = pool.run().await.expect("pool run failed");

    assert_eq!(summaries.len(), 3);
    for summary in &summaries {
        assert_eq!(summary.completed, 4);
    }

    let mut records = reporter.records();
    records.sort();
    assert_eq!(
        records,
        vec![
            "Worker 0 generated 4 traces",
            "Worker 1 generated 4 traces",
            "Worker 2 generated 4 traces",
        ]
    );

    // 3 workers x 4 traces x (root + 1 child)
    assert_eq!(exporter.get_finished_spans().unwrap().len(), 24);
}

#[tokio::test]
async fn test_pool_round_robin_assignment() {
    let reporter = Arc::new(CapturingReporter::default());
    let (tracer_a, exporter_a) = in_memory_tracer();
    let (tracer_b, exporter_b) = in_memory_tracer();

    let pool = PoolBuilder::new()
        .config(WorkerConfig::new(2).with_child_span_count(0))
        .worker_count(5)
        .tracers(vec![tracer_a, tracer_b])
        .reporter(reporter)
        .build()
        .expect("failed to build pool");

    pool.run().await.expect("pool run failed");

    // Workers 0, 2, 4 use tracer A; workers 1, 3 use tracer B
    assert_eq!(exporter_a.get_finished_spans().unwrap().len(), 6);
    assert_eq!(exporter_b.get_finished_spans().unwrap().len(), 4);
}

#[tokio::test]
async fn test_pool_reuses_single_tracer() {
    let reporter = Arc::new(CapturingReporter::default());
    let (tracer, exporter) = in_memory_tracer();

    let pool = PoolBuilder::new()
        .config(WorkerConfig::new(3).with_child_span_count(0))
        .worker_count(4)
        .tracer(tracer)
        .reporter(reporter.clone())
        .build()
        .expect("failed to build pool");

    let summaries = pool.run().await.expect("pool run failed");

    assert_eq!(summaries.len(), 4);
    assert_eq!(reporter.records().len(), 4);
    assert_eq!(exporter.get_finished_spans().unwrap().len(), 12);
}

#[tokio::test]
async fn test_pool_signal_stop_releases_run() {
    let reporter = Arc::new(CapturingReporter::default());
    let (tracer, _exporter) = in_memory_tracer();

    let pool = PoolBuilder::new()
        .config(WorkerConfig::new(1_000_000).with_pause(Duration::from_millis(2)))
        .worker_count(2)
        .tracer(tracer)
        .reporter(reporter.clone())
        .build()
        .expect("failed to build pool");

    let coordinator = pool.shutdown_coordinator();
    let handle = tokio::spawn(async move { pool.run().await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    coordinator.signal_stop();

    let summaries = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("pool did not stop")
        .expect("pool task panicked")
        .expect("pool run failed");

    assert_eq!(summaries.len(), 2);

    // The records that were logged match what the summaries say happened
    let mut records = reporter.records();
    records.sort();
    let mut expected: Vec<String> = summaries
        .iter()
        .enumerate()
        .map(|(id, s)| completion_message(id, s.completed))
        .collect();
    expected.sort();
    assert_eq!(records, expected);

    for summary in &summaries {
        assert!(summary.completed < 1_000_000);
    }
}
