//! HTTP request handlers for the places API
//!
//! Implements the listing (HTML and JSON), nearest places, token
//! issuance, index creation and health endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::core::error::PlacesError;
use crate::core::geo::parse_origin;
use crate::core::pagination::parse_page;
use crate::core::services::Services;
use crate::core::types::*;
use crate::http::error::PlainError;
use crate::http::render::render_listing;

/// `?page=` on listing routes
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// `?lat=&lon=` on the nearest route
#[derive(Debug, Default, Deserialize)]
pub struct NearestParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// `?name=` on index creation
#[derive(Debug, Default, Deserialize)]
pub struct CreateIndexParams {
    pub name: Option<String>,
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Index creation handler
///
/// Creates the index named by `?name=`, bulk loads the dataset into it
/// and raises its result window.
///
/// # Returns
///
/// 201 with a plain-text confirmation
///
/// # Errors
///
/// - `InvalidParam`: `name` missing or empty
/// - `InvalidIndexName`: name breaks engine naming rules
/// - `Engine`: the engine refused one of the steps
pub async fn create_index_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<CreateIndexParams>,
) -> Result<(StatusCode, &'static str), PlainError> {
    let name = params
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| PlacesError::InvalidParam("Missing 'name' parameter".to_string()))?;

    let report = services.provision_index(&name).await?;

    tracing::info!(
        index = %report.index,
        documents = report.documents,
        skipped = report.skipped,
        "Index provisioned"
    );

    Ok((StatusCode::CREATED, "index created"))
}

/// Any method other than PUT on the index creation route
pub async fn invalid_method_handler() -> PlainError {
    PlainError(PlacesError::InvalidParam("no valid method".to_string()))
}

/// HTML listing handler
///
/// Renders one page of places through the configured template.
pub async fn list_html_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, PlainError> {
    let page = parse_page(params.page.as_deref())?;
    let data = services.list_page(page).await?;
    let html = render_listing(&services.config.paths.template, &data).await?;

    Ok(Html(html))
}

/// JSON listing handler
///
/// # Errors
///
/// - `InvalidParam`: `page` is not an integer
/// - `InvalidPage`: `page` outside `[1, last]`
/// - `Engine`: search failed
pub async fn list_json_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageData>, PlacesError> {
    let page = parse_page(params.page.as_deref())?;
    let data = services.list_page(page).await?;

    Ok(Json(data))
}

/// Nearest places handler
///
/// Sits behind the bearer middleware.
///
/// # Errors
///
/// - `InvalidParam`: `lat`/`lon` missing, non-numeric or out of range
/// - `Engine`: search failed
pub async fn nearest_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<NearestParams>,
) -> Result<Json<NearestData>, PlacesError> {
    let origin = parse_origin(params.lat.as_deref(), params.lon.as_deref())?;
    let data = services.nearest(origin).await?;

    Ok(Json(data))
}

/// Token issuance handler
pub async fn token_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<TokenResponse>, PlacesError> {
    let token = services.tokens.issue()?;
    Ok(Json(TokenResponse { token }))
}
