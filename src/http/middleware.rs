//! Middleware for the places API
//!
//! Request logging on every route and bearer token verification on
//! protected routes.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

use crate::core::error::{PlacesError, TokenError};
use crate::core::services::Services;

/// Request logging middleware
///
/// Client errors are logged at WARN, server errors at ERROR, everything
/// else at INFO.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%method, %uri, status, duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %uri, status, duration_ms, "Request rejected");
    } else {
        info!(%method, %uri, status, duration_ms, "Request completed");
    }

    response
}

/// Bearer token middleware
///
/// Rejects the request with 401 unless it carries a valid
/// `Authorization: Bearer <token>` header. Verified claims are stored
/// in the request extensions.
pub async fn require_bearer(
    State(services): State<Arc<Services>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, PlacesError> {
    let verified = match request.headers().get(AUTHORIZATION) {
        None => Err(TokenError::MissingHeader),
        Some(value) => match value.to_str() {
            Ok(header) => services.tokens.verify(Some(header)),
            Err(_) => Err(TokenError::MalformedHeader),
        },
    };

    match verified {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(reason) => {
            warn!(uri = %request.uri(), %reason, "Bearer token rejected");
            Err(reason.into())
        }
    }
}
