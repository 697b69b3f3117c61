mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use tinyalias::api::handlers::save_url_handler;

fn server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/url", post(save_url_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_save_with_alias(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "abc" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, json!({ "status": "OK", "alias": "abc" }));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_save_generates_alias(pool: SqlitePool) {
    let server = server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "OK");

    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 5);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[sqlx::test]
async fn test_save_empty_alias_generates(pool: SqlitePool) {
    let server = server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["alias"]
            .as_str()
            .unwrap()
            .len(),
        5
    );
}

#[sqlx::test]
async fn test_save_duplicate_alias_conflict(pool: SqlitePool) {
    common::create_test_url(&pool, "taken", "https://first.example").await;
    let server = server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://second.example", "alias": "taken" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "Error", "error": "alias already exists" })
    );
}

#[sqlx::test]
async fn test_save_invalid_url(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "not a url", "alias": "abc" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "field URL is not a valid URL");
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_empty_url(pool: SqlitePool) {
    let server = server(pool);

    let response = server.post("/url").json(&json!({ "url": "" })).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "field URL is a required field"
    );
}

#[sqlx::test]
async fn test_save_reserved_alias(pool: SqlitePool) {
    let server = server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "health" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "field Alias is reserved"
    );
}

#[sqlx::test]
async fn test_save_empty_body(pool: SqlitePool) {
    let server = server(pool);

    let response = server.post("/url").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "Error", "error": "empty request" })
    );
}

#[sqlx::test]
async fn test_save_malformed_body(pool: SqlitePool) {
    let server = server(pool);

    let response = server.post("/url").text("{\"url\": ").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "failed to decode request"
    );
}

#[sqlx::test]
async fn test_save_missing_url_field(pool: SqlitePool) {
    let server = server(pool);

    let response = server.post("/url").json(&json!({ "alias": "abc" })).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "failed to decode request"
    );
}

#[sqlx::test]
async fn test_save_url_with_control_characters(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://exa\tmple.com/pa\nth", "alias": "ctl" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "Error", "error": "field URL is not a valid URL" })
    );
    assert_eq!(common::count_urls(&pool).await, 0);
}
