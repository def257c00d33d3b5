//! Router assembly.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;
use crate::http::handlers;
use crate::http::middleware::{log_request, require_bearer};

/// Build the application router over `services`
pub fn router(services: Arc<Services>) -> Router {
    let protected = Router::new()
        .route("/api/recommend/", get(handlers::nearest_handler))
        .route_layer(middleware::from_fn_with_state(
            services.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/", get(handlers::list_html_handler))
        .route("/api/", get(handlers::list_json_handler))
        .route("/api/get_token/", get(handlers::token_handler))
        .route(
            "/create/",
            put(handlers::create_index_handler).fallback(handlers::invalid_method_handler),
        )
        .merge(protected)
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
