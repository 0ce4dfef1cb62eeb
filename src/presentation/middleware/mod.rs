//! Middleware
//!
//! Tower middleware for request processing.

pub mod logging;
pub mod metrics;
pub mod security;

pub use logging::create_trace_layer;
pub use metrics::track_metrics;
pub use security::{
    security_headers_layer, SecurityHeadersConfig, SecurityHeadersLayer,
};
