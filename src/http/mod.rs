//! HTTP trigger surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, fixed /send route, any method)
//!     → bridge (publish with trace propagation)
//!     → response: message token, or rendered failure detail
//! ```

pub mod server;

pub use server::{HttpServer, LISTEN_PORT, TRIGGER_PATH};
