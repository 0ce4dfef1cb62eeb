//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::FromRef;
use axum::Router;
use axum_extra::extract::cookie::Key;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Settings;
use crate::domain::PetRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgPetRepository;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::create_trace_layer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pets: Arc<dyn PetRepository>,
    pub settings: Arc<Settings>,
    pub cookie_key: Key,
}

impl AppState {
    /// Build state around a pet store; the cookie key comes from the secret key.
    pub fn new(pets: Arc<dyn PetRepository>, settings: Settings) -> Result<Self> {
        let cookie_key = Key::try_from(settings.security.secret_key.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid secret key: {:?}", e))?;

        Ok(Self {
            pets,
            settings: Arc::new(settings),
            cookie_key,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Full middleware-wrapped router for the given state.
pub fn build_router(state: AppState) -> Router {
    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(create_trace_layer())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let db = database::create_pool(&settings.database)
            .await
            .context("failed to create database pool")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("failed to run database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;

        let pets: Arc<dyn PetRepository> = Arc::new(PgPetRepository::new(db));
        let state = AppState::new(pets, settings)?;
        let router = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
