//! Error Pages
//!
//! Renders [`AppError`] as an HTML page with the matching status code.

use axum::response::{IntoResponse, Response};

use crate::presentation::http::views;
use crate::shared::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.public_message();
        (status, views::error_page(status, &message)).into_response()
    }
}
