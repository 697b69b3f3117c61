mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use tinyalias::api::handlers::{missing_alias_handler, redirect_handler};

fn server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/", get(missing_alias_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_url(&pool, "redirect1", "https://example.com/target").await;
    let server = server(pool);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_keeps_query_string(pool: SqlitePool) {
    common::create_test_url(&pool, "q", "https://example.com/search?q=rust&page=2").await;
    let server = server(pool);

    let response = server.get("/q").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2"
    );
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = server(pool);

    let response = server.get("/nonexistent").await;

    assert_eq!(response.status_code(), 404);
    assert!(response.maybe_header("location").is_none());

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "not found");
}

#[sqlx::test]
async fn test_redirect_without_alias(pool: SqlitePool) {
    let server = server(pool);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "invalid request"
    );
}
