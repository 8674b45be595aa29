//! String Analyzer Server binary.
//!
//! Reads `.env`, then `server.*` and `STRING_ANALYZER_*` configuration, and
//! serves the REST API until interrupted.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
