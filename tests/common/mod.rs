#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tempfile::TempDir;

use lang_portal_backend::db::{migrate, seed, Db};

/// Fresh app over a migrated and seeded temp database. The TempDir must be
/// kept alive for the duration of the test.
pub async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let db = connect_temp_db(&temp_dir).await;

    migrate::run_migrations(db.pool())
        .await
        .expect("migration failed");
    seed::seed(db.pool()).await.expect("seed failed");

    (lang_portal_backend::create_app(db, 3), temp_dir)
}

pub async fn connect_temp_db(temp_dir: &TempDir) -> Db {
    let db_path = temp_dir.path().join("test.db");
    Db::connect(&format!("sqlite:{}?mode=rwc", db_path.display()))
        .await
        .expect("failed to open test database")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request_empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}
