//! Span recording for the publish path.
//!
//! # Responsibilities
//! - Initialize the process-wide span pipeline (exporter + provider)
//! - Open PRODUCER spans around each publish, named after the message body
//! - Guarantee every opened span is closed exactly once on every exit path
//!
//! # Design Decisions
//! - The recorder is a trait so tests can substitute a counting double
//! - Span closing rides a drop guard, the equivalent of a scoped resource:
//!   early returns, `?`, and panics all end the span
//! - A consumer service correlates on the span name matching the message
//!   body, so the name is always the generated token

use opentelemetry::trace::{SpanKind, TraceContextExt, Tracer, TracerProvider};
use opentelemetry::Context;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use opentelemetry_sdk::Resource;

const SERVICE_NAME: &str = "queue-bridge";

/// Capability to open producer spans around publish operations.
pub trait SpanRecorder: Send + Sync {
    /// Open a PRODUCER span named after the message it accompanies, parented
    /// to the currently active trace context (a new root when none is
    /// active). The returned guard closes the span when dropped.
    fn start_producer(&self, name: &str) -> SpanGuard;
}

/// An open span behind a [`SpanGuard`].
pub trait SpanHandle: Send {
    /// Trace context identifying this span, used for outbound propagation.
    fn context(&self) -> Context;

    /// Record the end timestamp. Called exactly once, by the guard.
    fn end(&mut self);
}

/// Scoped ownership of an open span.
///
/// Dropping the guard ends the span, so the span closes on every exit path
/// of the operation that opened it, including failures.
pub struct SpanGuard {
    handle: Box<dyn SpanHandle>,
}

impl SpanGuard {
    pub fn new(handle: Box<dyn SpanHandle>) -> Self {
        Self { handle }
    }

    /// Trace context of the guarded span.
    pub fn context(&self) -> Context {
        self.handle.context()
    }
}

impl Drop for SpanGuard {
    fn drop(&mut self) {
        self.handle.end();
    }
}

/// Production [`SpanRecorder`] backed by an OpenTelemetry tracer.
pub struct OtelSpanRecorder {
    tracer: SdkTracer,
}

impl OtelSpanRecorder {
    pub fn new(provider: &SdkTracerProvider) -> Self {
        Self {
            tracer: provider.tracer(SERVICE_NAME),
        }
    }
}

impl SpanRecorder for OtelSpanRecorder {
    fn start_producer(&self, name: &str) -> SpanGuard {
        let parent = Context::current();
        let span = self
            .tracer
            .span_builder(name.to_owned())
            .with_kind(SpanKind::Producer)
            .start_with_context(&self.tracer, &parent);
        SpanGuard::new(Box::new(OtelSpanHandle {
            cx: parent.with_span(span),
        }))
    }
}

struct OtelSpanHandle {
    cx: Context,
}

impl SpanHandle for OtelSpanHandle {
    fn context(&self) -> Context {
        self.cx.clone()
    }

    fn end(&mut self) {
        self.cx.span().end();
    }
}

/// Build the process-wide tracer provider.
///
/// Spans are processed synchronously and written to stdout. The caller owns
/// the provider for the process lifetime and shuts it down after the server
/// stops so the last spans flush.
pub fn init_tracer() -> SdkTracerProvider {
    let exporter = opentelemetry_stdout::SpanExporter::default();
    let resource = Resource::builder().with_service_name(SERVICE_NAME).build();
    SdkTracerProvider::builder()
        .with_resource(resource)
        .with_simple_exporter(exporter)
        .build()
}
