use crate::config::ServerConfig;
use crate::error::ServerResult;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;
use store::StringStore;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Analyzed string store (shared across requests)
    pub store: Arc<StringStore>,

    /// Prometheus handle, present when a recorder was installed
    pub metrics: Option<PrometheusHandle>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state, opening the configured store
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let backend = config.backend()?;
        let store = Arc::new(StringStore::open(&backend)?);

        Ok(Self {
            config: Arc::new(config),
            store,
            metrics: None,
            started_at: Instant::now(),
        })
    }

    /// Attach an installed Prometheus recorder handle
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub storage_backend: String,
    pub stored_strings: usize,
}
