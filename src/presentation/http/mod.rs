//! HTTP Presentation
//!
//! Routes, handlers, cookies and HTML rendering.

pub mod cookies;
pub mod error_response;
pub mod handlers;
pub mod routes;
pub mod views;
