//! API route handlers
//!
//! - `health`: liveness, readiness, metrics and server metadata
//! - `strings`: create, list, natural-language filter, get and delete

pub mod health;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "String Analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /strings",
            "GET /strings",
            "GET /strings/filter-by-natural-language",
            "GET /strings/{string_value}",
            "DELETE /strings/{string_value}",
            "GET /health",
            "GET /ready",
            "GET /metrics",
            "GET /metadata"
        ]
    })))
}

/// 404 Not Found handler for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
