//! HTTP server setup and the trigger handler.
//!
//! # Responsibilities
//! - Create the Axum router with the trigger route
//! - Wire up middleware (request tracing, panic containment)
//! - Serve on a caller-supplied listener with graceful shutdown
//! - Map relay outcomes onto the response contract

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::bridge::{error_chain, Bridge};
use crate::config::BridgeConfig;
use crate::observability::metrics;
use crate::observability::tracing::SpanRecorder;
use crate::publish::QueuePublisher;

/// Fixed listen port for the trigger surface.
pub const LISTEN_PORT: u16 = 58080;

/// Fixed trigger path. Any method invoking it publishes one message.
pub const TRIGGER_PATH: &str = "/send";

/// Application state injected into the handler.
#[derive(Clone)]
struct AppState {
    bridge: Bridge,
}

/// HTTP server for the bridge.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given capabilities.
    pub fn new(
        config: BridgeConfig,
        recorder: Arc<dyn SpanRecorder>,
        publisher: Arc<dyn QueuePublisher>,
    ) -> Self {
        let bridge = Bridge::new(config.destination, recorder, publisher);
        Self {
            router: Self::build_router(AppState { bridge }),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(TRIGGER_PATH, any(trigger_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::new())
    }

    /// Run the server, accepting triggers on the given listener until the
    /// shutdown channel fires. In-flight invocations complete before return.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, closing trigger listener");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Trigger handler.
///
/// Success answers 200 with the generated token so the caller can correlate
/// with downstream consumption. A publish failure also answers 200, with the
/// rendered cause chain as the body; only a handler that produced no
/// response at all surfaces as a non-2xx (panic containment above).
async fn trigger_handler(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    match state.bridge.relay().await {
        Ok(token) => {
            tracing::debug!(token = %token, "Message published");
            metrics::record_trigger("published", started);
            (StatusCode::OK, token).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Publish failed, echoing failure to caller");
            metrics::record_trigger("failed", started);
            (StatusCode::OK, error_chain(&err)).into_response()
        }
    }
}
