//! HTTP-to-queue publish bridge with distributed tracing.
//!
//! Receives an HTTP trigger, generates a unique message token, opens a
//! PRODUCER span named after the token, injects the active trace context
//! into the message attributes (W3C `traceparent`), and hands the envelope
//! to the queue transport. A downstream consumer reconstructs the trace
//! from the attributes it receives.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                 QUEUE BRIDGE                  │
//!                      │                                               │
//!    HTTP trigger      │  ┌─────────┐      ┌──────────────────────┐    │
//!    ──────────────────┼─▶│  http   │─────▶│       bridge         │    │
//!                      │  │ server  │      │  open span → inject  │    │
//!                      │  └─────────┘      │  → publish → close   │    │
//!                      │       ▲           └──────────┬───────────┘    │
//!                      │       │                      │                │
//!    token / failure   │       │                      ▼                │
//!    ◀─────────────────┼───────┘           ┌──────────────────────┐    │
//!                      │                   │       publish        │────┼──▶ queue
//!                      │                   │  envelope + carrier  │    │
//!                      │                   └──────────────────────┘    │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐  │
//!                      │  │           Cross-Cutting Concerns        │  │
//!                      │  │  ┌────────┐ ┌───────────────┐ ┌──────┐  │  │
//!                      │  │  │ config │ │ observability │ │ life-│  │  │
//!                      │  │  │        │ │ span/log/metr │ │ cycle│  │  │
//!                      │  │  └────────┘ └───────────────┘ └──────┘  │  │
//!                      │  └─────────────────────────────────────────┘  │
//!                      └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod bridge;
pub mod http;
pub mod publish;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
