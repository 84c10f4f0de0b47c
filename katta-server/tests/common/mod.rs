//! Shared helpers for router-level integration tests.
//!
//! Tests drive the real application router (in-memory SQLite, temp work
//! dir) through `tower::ServiceExt::oneshot` without binding a port.

#![allow(dead_code)]

use std::sync::Arc;

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::Argon2;
use axum::Router;
use axum::body::{Body, Bytes};
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use katta_server::auth::{JwtConfig, JwtService};
use katta_server::db::DbService;
use katta_server::{Config, ServerState, build_app};

pub const ADMIN_EMAIL: &str = "admin@katta.test";
pub const ADMIN_PASSWORD: &str = "katta-integration-secret";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    // keeps the uploads/work directory alive for the test's duration
    _work_dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn the app, letting the caller tweak the config (e.g. drop the
/// admin credentials).
pub async fn spawn_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let db = DbService::in_memory().await.expect("in-memory db");

    let mut config = Config {
        work_dir: work_dir.path().to_string_lossy().into_owned(),
        http_port: 0,
        environment: "test".to_string(),
        cors_origins: Vec::new(),
        admin_email: Some(ADMIN_EMAIL.to_string()),
        admin_password_hash: Some(hash_password(ADMIN_PASSWORD)),
        jwt: test_jwt_config(),
    };
    adjust(&mut config);

    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    let state = ServerState::new(config, db.pool, jwt_service);
    let app = build_app().with_state(state.clone());

    TestApp {
        app,
        state,
        _work_dir: work_dir,
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".to_string(),
        expiration_minutes: 60,
        issuer: "katta-server".to_string(),
        audience: "katta-admin".to_string(),
    }
}

pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("hash password")
        .to_string()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Hand-rolled multipart body with a single `image` field.
pub fn multipart_request(
    uri: &str,
    token: Option<&str>,
    filename: &str,
    content: &[u8],
) -> Request<Body> {
    const BOUNDARY: &str = "XKattaTestBoundaryX";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).expect("request")
}

/// Send a request, decoding the response body as JSON (Null when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, _, bytes) = send_raw(app, request).await;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Send a request, returning status, headers and the raw body.
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    (status, headers, bytes)
}

/// Create a product through the API and return its JSON.
pub async fn create_product(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let (status, json) = send(app, json_request("POST", "/api/products", body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json
}

/// A minimal valid create payload.
pub fn product_payload(name: &str, category: &str, subcategory: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": category,
        "subcategory": subcategory,
        "price": price,
        "images": [format!("/uploads/{}.jpg", name.to_lowercase().replace(' ', "-"))],
        "description": format!("{name} description"),
    })
}
