//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read QUEUE_URL, optional overrides)
//!     → BridgeConfig (validated, immutable)
//!     → shared by value with the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - The queue destination is mandatory; the process refuses to start
//!   without it
//! - The trigger port is fixed and not part of the configuration surface

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError, METRICS_ADDR_VAR, QUEUE_URL_VAR};
pub use schema::BridgeConfig;
pub use schema::ObservabilityConfig;
