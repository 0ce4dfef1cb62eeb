//! # Pet Adoption
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use pet_adoption::config::Settings;
use pet_adoption::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    pet_adoption::telemetry::init_tracing();

    info!("Starting Pet Adoption...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
