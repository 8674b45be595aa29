//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request id, logging, timeout, compression, CORS)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, health, not_found, strings};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (outermost first):
/// 1. Tracing spans
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Compression
/// 6. Timeout handling
/// 7. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let service_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .route("/metadata", get(health::server_metadata));

    let string_routes = Router::new()
        .route(
            "/strings",
            get(strings::list_strings).post(strings::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(strings::filter_by_natural_language),
        )
        .route(
            "/strings/{string_value}",
            get(strings::get_string).delete(strings::delete_string),
        );

    Router::new()
        .merge(service_routes)
        .merge(string_routes)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the string analyzer HTTP server
///
/// Initializes logging, opens the configured store, installs the Prometheus
/// recorder when enabled, and serves until SIGTERM or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // A subscriber may already be installed by an embedding application.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .try_init();

    let mut state = ServerState::new(config.clone())?;
    if config.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        state = state.with_metrics(handle);
    }
    let state = Arc::new(state);

    let app = build_router(state.clone());
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting string analyzer on {} with {} storage ({} strings stored)",
        addr,
        state.store.backend_kind(),
        state.store.count()?
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}MB",
        config.timeout_secs,
        config.max_body_size_mb
    );
    tracing::info!(
        "CORS: {}, Metrics: {}",
        config.enable_cors,
        config.metrics_enabled
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.store.flush()?;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
