//! Integration tests for the places REST API

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use places::core::services::Services;
use places::core::types::*;
use places::http;
use serde_json::Value;
use tower::ServiceExt as TowerServiceExt;

use crate::common::{create_test_services, issue_expired_token, sample_places, FakeStore, TestFiles};

/// Create a test application over `places`
fn create_test_app(places: Vec<Place>) -> (Router, Arc<Services>, Arc<FakeStore>, TestFiles) {
    let (services, store, files) = create_test_services(FakeStore::with_places(places));
    let app = http::router(services.clone());
    (app, services, store, files)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _services, _store, _files) = create_test_app(vec![]);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_list_json_first_page() {
    let (app, _services, store, _files) = create_test_app(sample_places(25));

    let response = app.oneshot(get("/api/?page=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: PageData = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(page.name, "Places");
    assert_eq!(page.total, 25);
    assert_eq!(page.places.len(), 10);
    assert_eq!(page.places[0].name, "Place 0");
    assert_eq!((page.prev, page.next, page.last, page.page), (0, 2, 3, 1));
    assert_eq!(store.calls(), vec!["list 10 0"]);
}

#[tokio::test]
async fn test_list_json_last_page_is_partial() {
    let (app, _services, store, _files) = create_test_app(sample_places(25));

    let response = app.oneshot(get("/api/?page=3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: PageData = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(page.places.len(), 5);
    assert_eq!(page.places[0].name, "Place 20");
    assert_eq!((page.prev, page.next, page.last), (2, 4, 3));
    assert_eq!(store.calls(), vec!["list 10 20"]);
}

#[tokio::test]
async fn test_list_json_defaults_to_first_page() {
    let (app, _services, _store, _files) = create_test_app(sample_places(3));

    let response = app.oneshot(get("/api/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
}

#[tokio::test]
async fn test_list_json_page_zero_is_rejected_without_query() {
    let (app, _services, store, _files) = create_test_app(sample_places(25));

    let response = app.oneshot(get("/api/?page=0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid 'page' value: '0'");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_list_json_page_past_last_is_rejected() {
    let (app, _services, _store, _files) = create_test_app(sample_places(25));

    let response = app.oneshot(get("/api/?page=4")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid 'page' value: '4'");
}

#[tokio::test]
async fn test_list_json_non_numeric_page() {
    let (app, _services, _store, _files) = create_test_app(sample_places(25));

    let response = app.oneshot(get("/api/?page=two")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "invalid 'page' param");
}

#[tokio::test]
async fn test_list_html_renders_template() {
    let (app, _services, _store, _files) = create_test_app(sample_places(25));

    let response = app.oneshot(get("/?page=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<h1>Places</h1>"));
    assert!(html.contains("total=25 page=2 last=3"));
    assert!(html.contains("<li>Place 10</li>"));
    assert!(html.contains("href=\"/?page=1\">prev"));
    assert!(html.contains("href=\"/?page=3\">next"));
}

#[tokio::test]
async fn test_list_html_error_is_plain_text() {
    let (app, _services, _store, _files) = create_test_app(sample_places(5));

    let response = app.oneshot(get("/?page=9")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid 'page' value: '9'");
}

#[tokio::test]
async fn test_get_token_issues_valid_token() {
    let (app, services, _store, _files) = create_test_app(vec![]);

    let response = app.oneshot(get("/api/get_token/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let token: TokenResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let claims = services.tokens.verify_token(&token.token).unwrap();
    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[tokio::test]
async fn test_recommend_requires_authorization_header() {
    let (app, _services, store, _files) = create_test_app(sample_places(5));

    let response = app
        .oneshot(get("/api/recommend/?lat=55.0&lon=37.6"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "missing Authorization header");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_recommend_rejects_malformed_header() {
    let (app, services, _store, _files) = create_test_app(sample_places(5));
    let token = services.tokens.issue().unwrap();

    let response = app
        .oneshot(get_with_auth(
            "/api/recommend/?lat=55.0&lon=37.6",
            &format!("Token {token}"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Bearer <token>"));
}

#[tokio::test]
async fn test_recommend_rejects_expired_token() {
    let (app, services, _store, _files) = create_test_app(sample_places(5));
    let token = issue_expired_token(&services);

    let response = app
        .oneshot(get_with_auth(
            "/api/recommend/?lat=55.0&lon=37.6",
            &format!("Bearer {token}"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "token expired");
}

#[tokio::test]
async fn test_recommend_rejects_foreign_signature() {
    let (app, _services, _store, _files) = create_test_app(sample_places(5));
    let foreign = places::core::auth::TokenService::new(b"someone-else", chrono::Duration::minutes(5));
    let token = foreign.issue().unwrap();

    let response = app
        .oneshot(get_with_auth(
            "/api/recommend/?lat=55.0&lon=37.6",
            &format!("Bearer {token}"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_recommend_returns_nearest_places() {
    let (app, services, store, _files) = create_test_app(sample_places(10));
    let token = services.tokens.issue().unwrap();

    let response = app
        .oneshot(get_with_auth(
            "/api/recommend/?lat=55.05&lon=37.6",
            &format!("Bearer {token}"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let data: NearestData = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(data.name, "Recommendation");
    assert_eq!(data.places.len(), 3);
    assert_eq!(data.places[0].name, "Place 5");
    assert_eq!(store.calls(), vec!["nearest 3"]);
}

#[tokio::test]
async fn test_recommend_requires_both_coordinates() {
    let (app, services, _store, _files) = create_test_app(sample_places(5));
    let token = services.tokens.issue().unwrap();

    let response = app
        .oneshot(get_with_auth("/api/recommend/?lat=55.0", &format!("Bearer {token}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "The parameters 'lat' and 'lon' are required");
}

#[tokio::test]
async fn test_recommend_non_numeric_latitude() {
    let (app, services, store, _files) = create_test_app(sample_places(5));
    let token = services.tokens.issue().unwrap();

    let response = app
        .oneshot(get_with_auth(
            "/api/recommend/?lat=north&lon=37.6",
            &format!("Bearer {token}"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "invalid 'lat' param");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_create_index_provisions_in_order() {
    let (app, _services, store, _files) = create_test_app(sample_places(2));

    let request = Request::builder()
        .method("PUT")
        .uri("/create/?name=shops")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_text(response).await, "index created");
    assert_eq!(
        store.calls(),
        vec!["create shops", "bulk shops", "settings shops"]
    );
}

#[tokio::test]
async fn test_create_index_wrong_method() {
    let (app, _services, store, _files) = create_test_app(vec![]);

    let response = app.oneshot(get("/create/?name=shops")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "no valid method");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_create_index_missing_name() {
    let (app, _services, _store, _files) = create_test_app(vec![]);

    let request = Request::builder()
        .method("PUT")
        .uri("/create/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Missing 'name' parameter");
}

#[tokio::test]
async fn test_create_index_engine_error_is_passed_through() {
    let (services, store, _files) = create_test_services(FakeStore::failing_on("create"));
    let app = http::router(services);

    let request = Request::builder()
        .method("PUT")
        .uri("/create/?name=shops")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "{\"error\":\"create refused\"}");
    assert_eq!(store.calls(), vec!["create shops"]);
}
