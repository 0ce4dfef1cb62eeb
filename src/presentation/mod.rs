//! Presentation Layer
//!
//! HTTP routes, HTML views and middleware.

pub mod http;
pub mod middleware;
