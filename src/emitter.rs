//! Trace construction against an OpenTelemetry tracer handle

use opentelemetry::global::BoxedTracer;
use opentelemetry::trace::{Span, SpanKind, TraceContextExt, Tracer};
use opentelemetry::{Context, KeyValue};

use crate::config::WorkerConfig;

/// Root span name, matching the reference generator's output
const ROOT_SPAN_NAME: &str = "lets-go";

/// Child span name, matching the reference generator's output
const CHILD_SPAN_NAME: &str = "okey-dokey";

/// Builds one trace (a root span plus a fan-out of child spans) per call
///
/// Stateless given its inputs. `emit` returns only after every span of the
/// trace has been closed; whether the backing exporter ships them is the
/// exporter's business, never this type's.
#[derive(Debug, Clone)]
pub struct TraceEmitter {
    service_name: String,
    child_span_count: usize,
    debug: bool,
    firehose: bool,
}

impl TraceEmitter {
    /// Create an emitter from the span-shape fields of a worker config
    pub fn from_config(config: &WorkerConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            child_span_count: config.child_span_count,
            debug: config.debug,
            firehose: config.firehose,
        }
    }

    /// Emit one trace through the given tracer
    ///
    /// The root span starts first and ends last; each child starts and ends
    /// in sequence under the root. Backends that derive causal or temporal
    /// relationships from start/end ordering therefore see
    /// parent-before-children-start and parent-ends-after-all-children.
    pub fn emit(&self, tracer: &BoxedTracer) {
        let root = tracer
            .span_builder(ROOT_SPAN_NAME)
            .with_kind(SpanKind::Client)
            .with_attributes(self.span_attributes())
            .start(tracer);
        let parent_cx = Context::current_with_span(root);

        for _ in 0..self.child_span_count {
            let mut child = tracer
                .span_builder(CHILD_SPAN_NAME)
                .with_kind(SpanKind::Server)
                .with_attributes(self.span_attributes())
                .start_with_context(tracer, &parent_cx);
            child.end();
        }

        parent_cx.span().end();
    }

    /// Number of child spans per trace
    pub fn child_span_count(&self) -> usize {
        self.child_span_count
    }

    /// Attribute set carried by every span of the trace
    fn span_attributes(&self) -> Vec<KeyValue> {
        let mut attrs = vec![KeyValue::new("service.name", self.service_name.clone())];
        if self.debug {
            attrs.push(KeyValue::new("debug", true));
        }
        if self.firehose {
            attrs.push(KeyValue::new("firehose", true));
        }
        attrs
    }
}
