//! String Analyzer Server - HTTP REST API for string analysis
//!
//! Exposes the `analyzer` computations and the `store` persistence layer over
//! JSON/HTTP:
//!
//! - **Create**: analyze a string and persist the result, keyed by SHA-256
//! - **List**: property filters and plain-English queries
//! - **Get / Delete**: by exact string value
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /strings` - Analyze and store `{"value": "..."}` (201, 400, 409, 422)
//! - `GET /strings` - List with `is_palindrome`, `min_length`, `max_length`,
//!   `word_count`, `contains_character` filters
//! - `GET /strings/filter-by-natural-language?query=...` - List via plain English
//! - `GET /strings/{string_value}` - Fetch one (404 if absent)
//! - `DELETE /strings/{string_value}` - Delete one (204, 404 if absent)
//! - `GET /`, `/health`, `/ready`, `/metrics`, `/metadata`

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
