//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;
use url::Url;

use crate::config::schema::{BridgeConfig, ObservabilityConfig};

/// Environment variable naming the queue destination. Mandatory.
pub const QUEUE_URL_VAR: &str = "QUEUE_URL";

/// Environment variable enabling the Prometheus exposition listener.
pub const METRICS_ADDR_VAR: &str = "BRIDGE_METRICS_ADDR";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The mandatory destination variable is not set.
    #[error("environment variable {0} is not set")]
    MissingDestination(&'static str),

    /// The destination variable is set but empty.
    #[error("environment variable {0} is empty")]
    EmptyDestination(&'static str),

    /// The destination is not a well-formed URL.
    #[error("environment variable {var} holds an invalid destination URL")]
    InvalidDestination {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Load configuration from the process environment.
///
/// Fails when `QUEUE_URL` is absent, empty, or not a URL the queue transport
/// can address. Callers are expected to treat any error as fatal and exit
/// before binding the trigger listener.
pub fn load_from_env() -> Result<BridgeConfig, ConfigError> {
    from_lookup(|var| env::var(var).ok())
}

/// Build configuration from an arbitrary variable lookup.
///
/// Split out from [`load_from_env`] so tests can exercise the loading rules
/// without mutating process-global environment state.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<BridgeConfig, ConfigError> {
    let destination = lookup(QUEUE_URL_VAR).ok_or(ConfigError::MissingDestination(QUEUE_URL_VAR))?;
    if destination.trim().is_empty() {
        return Err(ConfigError::EmptyDestination(QUEUE_URL_VAR));
    }
    Url::parse(&destination).map_err(|source| ConfigError::InvalidDestination {
        var: QUEUE_URL_VAR,
        source,
    })?;

    let metrics_address = lookup(METRICS_ADDR_VAR).filter(|addr| !addr.is_empty());

    Ok(BridgeConfig {
        destination,
        observability: ObservabilityConfig { metrics_address },
    })
}
