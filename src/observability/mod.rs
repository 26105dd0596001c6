//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Trigger handling produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (trigger counters, publish latency)
//!     → tracing.rs (PRODUCER spans, one per publish)
//!
//! Outbound propagation:
//!     tracing.rs span context
//!         → propagation.rs (W3C traceparent encoding)
//!         → message attributes on the published envelope
//! ```
//!
//! # Design Decisions
//! - The span pipeline is initialized once at startup and passed into the
//!   trigger handler as a capability, never looked up through globals
//! - Span export uses a simple per-span processor writing to stdout
//! - Metrics recording is always on; the exposition listener is opt-in

pub mod logging;
pub mod metrics;
pub mod propagation;
pub mod tracing;
