//! GRC Risk Assessment Service - Main Entry Point

use anyhow::Result;
use api::{init_logging, run_server, ServiceConfig};
use storage::Repository;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== GRC Risk Assessment API v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::load()?;

    // Explicit startup phase: schema must exist before the first request
    let repository = Repository::connect(&config.database_path).await?;
    repository.initialize().await?;

    run_server(&config, repository).await?;

    Ok(())
}
