//! HTTP status mapping for [`PlacesError`].
//!
//! JSON routes return `{"error": "..."}`; the HTML listing and index
//! creation routes return the message as plain text via [`PlainError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::PlacesError;
use crate::core::types::ErrorResponse;

impl PlacesError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_unauthorized() {
            StatusCode::UNAUTHORIZED
        } else if self.is_internal() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for PlacesError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.message(),
        });

        (status, body).into_response()
    }
}

/// Error rendered as a plain-text body
#[derive(Debug)]
pub struct PlainError(pub PlacesError);

impl From<PlacesError> for PlainError {
    fn from(err: PlacesError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlainError {
    fn into_response(self) -> Response {
        (self.0.status_code(), self.0.message()).into_response()
    }
}
