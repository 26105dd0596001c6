//! Shared doubles and helpers for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{http::HeaderMap, http::StatusCode, routing::any, Router};
use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
use opentelemetry::Context;

use queue_bridge::config::BridgeConfig;
use queue_bridge::http::HttpServer;
use queue_bridge::lifecycle::Shutdown;
use queue_bridge::observability::tracing::{SpanGuard, SpanHandle, SpanRecorder};
use queue_bridge::publish::{Envelope, PublishError, QueuePublisher};

/// Publisher double that records every send and reports success.
#[derive(Default)]
pub struct RecordingPublisher {
    pub sends: Mutex<Vec<(String, Envelope)>>,
}

#[async_trait]
impl QueuePublisher for RecordingPublisher {
    async fn send(&self, destination: &str, envelope: Envelope) -> Result<(), PublishError> {
        self.sends
            .lock()
            .unwrap()
            .push((destination.to_string(), envelope));
        Ok(())
    }
}

/// Publisher double that fails every send with the given status.
pub struct RejectingPublisher {
    pub status: u16,
}

#[async_trait]
impl QueuePublisher for RejectingPublisher {
    async fn send(&self, _destination: &str, _envelope: Envelope) -> Result<(), PublishError> {
        Err(PublishError::Rejected {
            status: self.status,
        })
    }
}

/// Span recorder double counting opens and closes.
///
/// Each span gets a distinct trace/span id so cross-contamination between
/// concurrent carriers is observable.
#[derive(Default)]
pub struct CountingRecorder {
    pub opened: AtomicUsize,
    pub closed: Arc<AtomicUsize>,
}

impl SpanRecorder for CountingRecorder {
    fn start_producer(&self, _name: &str) -> SpanGuard {
        let n = self.opened.fetch_add(1, Ordering::SeqCst) as u128 + 1;
        let span_context = SpanContext::new(
            TraceId::from_bytes(n.to_be_bytes()),
            SpanId::from_bytes((n as u64).to_be_bytes()),
            TraceFlags::SAMPLED,
            false,
            TraceState::default(),
        );
        SpanGuard::new(Box::new(CountingHandle {
            closed: self.closed.clone(),
            cx: Context::new().with_remote_span_context(span_context),
        }))
    }
}

struct CountingHandle {
    closed: Arc<AtomicUsize>,
    cx: Context,
}

impl SpanHandle for CountingHandle {
    fn context(&self) -> Context {
        self.cx.clone()
    }

    fn end(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Start a bridge server on an ephemeral port with the given capabilities.
pub async fn spawn_bridge(
    destination: &str,
    recorder: Arc<dyn SpanRecorder>,
    publisher: Arc<dyn QueuePublisher>,
) -> (SocketAddr, Shutdown) {
    let config = BridgeConfig {
        destination: destination.to_string(),
        ..BridgeConfig::default()
    };
    let server = HttpServer::new(config, recorder, publisher);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// One message as seen by the mock queue endpoint.
#[derive(Debug, Clone)]
pub struct CapturedMessage {
    pub body: String,
    pub traceparent: Option<String>,
}

/// Start a mock queue endpoint that captures every delivery and answers
/// with a fixed status.
pub async fn start_mock_queue(
    captured: Arc<Mutex<Vec<CapturedMessage>>>,
    status: StatusCode,
) -> SocketAddr {
    let app = Router::new().route(
        "/enqueue",
        any(move |headers: HeaderMap, body: String| {
            let captured = captured.clone();
            async move {
                let traceparent = headers
                    .get("traceparent")
                    .and_then(|value| value.to_str().ok())
                    .map(String::from);
                captured
                    .lock()
                    .unwrap()
                    .push(CapturedMessage { body, traceparent });
                status
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}
