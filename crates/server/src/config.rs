use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use store::BackendConfig;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Install the Prometheus recorder and serve it on `/metrics`
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Storage backend: `redb` or `memory`
    #[serde(default = "default_storage_backend")]
    pub storage_backend: String,

    /// Database file for the `redb` backend
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            storage_backend: default_storage_backend(),
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `server.{toml,yaml,json}` file,
    /// overridden by `STRING_ANALYZER_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(
                config::Environment::with_prefix("STRING_ANALYZER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.backend()?;
        Ok(config)
    }

    /// Configuration suitable for tests: in-memory storage, no metrics recorder.
    pub fn in_memory() -> Self {
        Self {
            storage_backend: "memory".to_string(),
            metrics_enabled: false,
            ..Self::default()
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    /// Resolve the storage backend settings.
    pub fn backend(&self) -> anyhow::Result<BackendConfig> {
        match self.storage_backend.to_ascii_lowercase().as_str() {
            "redb" => Ok(BackendConfig::redb(self.db_path.clone())),
            "memory" | "in-memory" | "in_memory" => Ok(BackendConfig::in_memory()),
            other => anyhow::bail!("unknown storage backend '{other}', expected 'redb' or 'memory'"),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_storage_backend() -> String {
    "redb".to_string()
}

fn default_db_path() -> String {
    "strings.redb".to_string()
}
