#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use pizza_api::{app, apply_migrations, connect, seed_sample_data, AppState};

/// Fresh in-memory database with the schema applied but no rows.
pub async fn empty_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.expect("connect");
    apply_migrations(&pool).await.expect("migrate");
    pool
}

/// Fresh in-memory database holding the sample data.
///
/// Ids are deterministic: restaurants, pizzas and restaurant_pizzas are each numbered 1..=3,
/// and restaurant_pizza N pairs restaurant N with pizza N.
pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    seed_sample_data(&pool).await.expect("seed");
    pool
}

/// Seeded database in a file under a temp dir, with a pool of several connections so
/// requests really hit SQLite at the same time. Keep the `TempDir` alive for the test.
pub async fn seeded_file_pool() -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("pizza.db").display());
    let pool = connect(&url, 5).await.expect("connect");
    apply_migrations(&pool).await.expect("migrate");
    seed_sample_data(&pool).await.expect("seed");
    (dir, pool)
}

/// Same router the server binary runs.
pub fn build_test_app(pool: SqlitePool) -> Router {
    app(AppState::new(pool))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request failed")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count");
    count
}
