//! Trigger handling core.
//!
//! One invocation walks a fixed sequence: generate a unique message token,
//! open a PRODUCER span named after it, inject the span's trace context into
//! the envelope attributes, hand the envelope to the queue transport, and
//! close the span whether or not the send succeeded. Nothing is shared
//! between invocations beyond the immutable destination and the two
//! capabilities.

use std::sync::Arc;

use thiserror::Error;

use crate::observability::propagation;
use crate::observability::tracing::SpanRecorder;
use crate::publish::{Envelope, PublishError, QueuePublisher};

/// Failure of one relay invocation.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("publish to {destination} failed")]
    Publish {
        destination: String,
        #[source]
        source: PublishError,
    },
}

/// Orchestrates the publish operation for each trigger.
#[derive(Clone)]
pub struct Bridge {
    destination: String,
    recorder: Arc<dyn SpanRecorder>,
    publisher: Arc<dyn QueuePublisher>,
}

impl Bridge {
    pub fn new(
        destination: String,
        recorder: Arc<dyn SpanRecorder>,
        publisher: Arc<dyn QueuePublisher>,
    ) -> Self {
        Self {
            destination,
            recorder,
            publisher,
        }
    }

    /// Publish one freshly generated message and return its token.
    ///
    /// The producer span is closed before this returns, on success and on
    /// failure alike; the guard's drop covers every exit path.
    pub async fn relay(&self) -> Result<String, RelayError> {
        let mut envelope = Envelope::generated();
        let token = envelope.body.clone();

        let span = self.recorder.start_producer(&token);
        propagation::inject_context(&span.context(), &mut envelope.attributes);

        let sent = self.publisher.send(&self.destination, envelope).await;
        drop(span);

        sent.map_err(|source| RelayError::Publish {
            destination: self.destination.clone(),
            source,
        })?;
        Ok(token)
    }
}

/// Render an error and its full cause chain as human-readable text.
///
/// This is what a caller sees in the response body when a publish fails.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
