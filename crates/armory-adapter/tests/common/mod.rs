//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use armory_adapter::repository::sqlite::{connect_in_memory, ensure_schema};
use armory_adapter::{create_router, AppState, DevModeIdentityProvider, SqliteLoadoutRepository};
use armory_domain::{Catalog, LoadoutRepository};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Creates an in-memory SQLite repository with the schema applied.
pub async fn setup_test_repository() -> SqliteLoadoutRepository {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create SQLite pool");
    ensure_schema(&pool).await.expect("Failed to create schema");
    SqliteLoadoutRepository::new(pool)
}

/// Creates an AppState over `repository` with the standard catalog.
pub fn create_test_state<R: LoadoutRepository + Clone>(repository: R) -> AppState<R> {
    AppState::new(
        Arc::new(Catalog::standard()),
        repository,
        Arc::new(DevModeIdentityProvider),
    )
}

/// Creates a test router backed by a fresh SQLite database.
pub async fn create_test_router() -> (Router, SqliteLoadoutRepository) {
    let repository = setup_test_repository().await;
    let router = create_router(create_test_state(repository.clone()));
    (router, repository)
}

/// Helper to make GET requests.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to make authenticated GET requests.
pub fn authed_get_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Helper to make POST requests with JSON body and optional credential.
pub fn post_json_request(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Sends request and parses JSON response.
pub async fn send_request<T: DeserializeOwned>(
    app: Router,
    request: Request<Body>,
) -> (StatusCode, T) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: T = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Failed to parse response: {} - Body: {:?}",
            e,
            String::from_utf8_lossy(&body)
        )
    });
    (status, parsed)
}
