//! Queue bridge binary.
//!
//! Wires the trigger surface to the production capabilities: the
//! OpenTelemetry span recorder and the HTTP relay queue transport. The
//! destination is the one mandatory piece of configuration; without it the
//! process logs and exits before binding the listener.

use std::sync::Arc;

use tokio::net::TcpListener;

use queue_bridge::config;
use queue_bridge::http::{HttpServer, LISTEN_PORT};
use queue_bridge::lifecycle::Shutdown;
use queue_bridge::observability::tracing::OtelSpanRecorder;
use queue_bridge::observability::{logging, metrics, tracing as trace_pipeline};
use queue_bridge::publish::HttpRelayPublisher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("queue-bridge v0.1.0 starting");

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Refusing to start without a valid queue destination");
            std::process::exit(1);
        }
    };

    tracing::info!(destination = %config.destination, "Configuration loaded");

    if let Some(addr) = config.observability.metrics_address.as_deref() {
        match addr.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(metrics_address = %addr, "Failed to parse metrics address"),
        }
    }

    // Span pipeline lives for the whole process; shut down after the server
    // stops so the last spans flush.
    let provider = trace_pipeline::init_tracer();
    let recorder = Arc::new(OtelSpanRecorder::new(&provider));
    let publisher = Arc::new(HttpRelayPublisher::new());

    let listener = TcpListener::bind(("0.0.0.0", LISTEN_PORT)).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for triggers");

    let shutdown = Shutdown::new();
    shutdown.listen_for_signals();

    let server = HttpServer::new(config, recorder, publisher);
    server.run(listener, shutdown.subscribe()).await?;

    provider.shutdown()?;
    tracing::info!("Shutdown complete");
    Ok(())
}
