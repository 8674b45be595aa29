use crate::error::ServerResult;
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "string-analyzer",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Returns 200 once the store answers a count query
pub async fn readiness_check(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let stored = state.store.count()?;

    Ok(Json(json!({
        "status": "ready",
        "service": "string-analyzer",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
        "components": {
            "api": "ready",
            "store": state.store.backend_kind(),
        },
        "stored_strings": stored,
    })))
}

/// Prometheus metrics endpoint
///
/// Falls back to a small JSON document when no recorder is installed.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => Json(json!({
            "uptime_seconds": state.uptime_seconds(),
        }))
        .into_response(),
    }
}

/// Server metadata endpoint
pub async fn server_metadata(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let metadata = ServerMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        storage_backend: state.store.backend_kind().to_string(),
        stored_strings: state.store.count()?,
    };

    Ok(Json(metadata))
}
