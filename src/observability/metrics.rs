//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bridge_triggers_total` (counter): triggers handled, by outcome
//! - `bridge_publish_duration_seconds` (histogram): publish latency, by outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exposition endpoint on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }
}

/// Record one handled trigger and its publish latency.
pub fn record_trigger(outcome: &'static str, started: Instant) {
    counter!("bridge_triggers_total", "outcome" => outcome).increment(1);
    histogram!("bridge_publish_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
