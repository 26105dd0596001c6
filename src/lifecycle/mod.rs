//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → init telemetry → bind listener → serve
//!
//! Shutdown (shutdown.rs):
//!     SIGINT/SIGTERM → broadcast → listener stops accepting
//!     → in-flight publishes finish → tracer provider flushes
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
