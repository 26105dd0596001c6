//! Queue publishing subsystem.
//!
//! # Data Flow
//! ```text
//! bridge builds Envelope (body + attributes)
//!     → QueuePublisher::send(destination, envelope)
//!     → transport delivers body and attributes to the destination
//! ```
//!
//! # Design Decisions
//! - The transport stays behind a trait; the bridge never sees how a message
//!   reaches the queue, and tests substitute recording doubles
//! - Failures surface as catchable per-send errors, never process faults
//! - No retry or batching; delivery guarantees belong to the queue service

pub mod envelope;
pub mod relay;

use async_trait::async_trait;
use thiserror::Error;

pub use envelope::{AttributeValue, Envelope, MessageAttributes};
pub use relay::HttpRelayPublisher;

/// Errors from a single send attempt.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The destination answered with a non-success status.
    #[error("destination rejected message with status {status}")]
    Rejected { status: u16 },

    /// The destination could not be reached or the exchange failed mid-way.
    #[error("failed to reach destination")]
    Transport(#[from] reqwest::Error),
}

/// Capability to send one message to a named destination.
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    async fn send(&self, destination: &str, envelope: Envelope) -> Result<(), PublishError>;
}
