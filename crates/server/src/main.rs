//! Docugen Server - HTTP REST API for documentation generation
//!
//! This binary serves the upload and export endpoints with authentication
//! and rate limiting.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
