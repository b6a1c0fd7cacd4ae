//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router and wire up middleware (tracing, limits,
//!   timeout, request ID)
//! - Accept report submissions on POST /report
//! - Answer every other method+path with the not-found envelope
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::{
    body::Bytes,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::envelope::{ApiError, ReportReceived};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};

/// HTTP server for the report API.
pub struct ReportServer {
    router: Router,
}

impl ReportServer {
    /// Create a new server with the given configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            router: app(config),
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
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
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Exposed so tests can drive the router in-process without a listener.
pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/report", post(submit_report))
        // Wrong methods on /report answer 404 like any other unmatched route,
        // so the 405 case is routed to the same handler.
        .fallback(unknown_route)
        .method_not_allowed_fallback(unknown_route)
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
}

/// Report submission handler.
///
/// The body arrives fully accumulated; chunks are concatenated in arrival
/// order by the stack before the handler runs. A parse failure is terminal
/// for the request and never affects the accept loop.
async fn submit_report(headers: HeaderMap, body: Bytes) -> Response {
    let request_id = request_id(&headers);

    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(value) => {
            tracing::debug!(request_id = %request_id, payload = %value, "Report body parsed");
            ReportReceived::new(value).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Invalid JSON in report body");
            ApiError::invalid_json().into_response()
        }
    }
}

/// Handler for every method+path that is not POST /report.
async fn unknown_route(headers: HeaderMap, method: Method, uri: Uri) -> Response {
    tracing::warn!(
        request_id = %request_id(&headers),
        method = %method,
        path = %uri.path(),
        "No route matched"
    );
    ApiError::endpoint_not_found().into_response()
}

fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
