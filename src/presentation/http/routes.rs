//! Route Configuration
//!
//! Configures all HTTP routes of the service.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{security_headers_layer, track_metrics};
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    let security = security_headers_layer(state.settings.is_production());

    Router::new()
        .route("/", get(handlers::pets::list_pets))
        .route(
            "/add",
            get(handlers::pets::new_pet_form).post(handlers::pets::create_pet),
        )
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .fallback(handlers::pets::not_found)
        .layer(middleware::from_fn(track_metrics))
        // Outermost so headers are added to every response
        .layer(security)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}
