//! Configuration schema definitions.
//!
//! All types derive Serde traits so the schema stays deserializable should a
//! file-based source ever feed it; today the loader fills it from the
//! environment.

use serde::{Deserialize, Serialize};

/// Root configuration for the bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Queue destination the bridge publishes to. Mandatory; the loader
    /// rejects an absent or empty value.
    pub destination: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Address for the Prometheus exposition endpoint. Metrics recording is
    /// always on; the HTTP listener only starts when this is set.
    pub metrics_address: Option<String>,
}
