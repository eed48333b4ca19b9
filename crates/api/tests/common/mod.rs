#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use lentera_api::auth::jwt::{issue_token, AuthConfig};
use lentera_api::config::ServerConfig;
use lentera_api::router::build_app_router;
use lentera_api::state::AppState;

pub const ADMIN_EMAIL: &str = "admin@lentera.test";
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        public_base_url: "https://lentera.test".to_string(),
        admin_email: ADMIN_EMAIL.to_string(),
        auth: AuthConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_for(subject: &str, email: Option<&str>) -> String {
    issue_token(subject, email, 15, &test_config().auth).expect("token generation")
}

pub fn admin_token() -> String {
    // Case differs from the configured email on purpose.
    token_for("user_admin", Some("Admin@Lentera.test"))
}

pub fn reader_token() -> String {
    token_for("user_reader", Some("reader@example.com"))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a novel through the admin API, returning the created `data`.
pub async fn create_novel(pool: &PgPool, body: Value) -> Value {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/admin/novels", &admin_token(), body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}

/// Create a chapter through the admin API, returning the created `data`.
pub async fn create_chapter(pool: &PgPool, novel_id: i64, order: i64, title: &str) -> Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/admin/novels/{novel_id}/chapters"),
        &admin_token(),
        serde_json::json!({ "title": title, "content": format!("Isi {title}."), "order": order }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}
