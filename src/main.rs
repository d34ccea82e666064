//! # HR Directory Main Entry Point

use anyhow::Context;
use directory::{
    config::ConfigLoader, db, schema::ensure_schema, server::run_server, store::DirectoryStore,
    telemetry,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from layered env files and variables
    let config = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    telemetry::init_tracing(&config).context("failed to initialize tracing")?;

    info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        info!(config = %redacted_json, "Effective configuration");
    }

    let connection = db::init_pool(&config).await?;
    if config.auto_create_schema {
        ensure_schema(&connection)
            .await
            .context("failed to create directory schema")?;
        info!("Directory schema ready");
    }

    run_server(config, DirectoryStore::new(connection)).await
}
