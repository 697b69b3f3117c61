mod common;

use serde_json::json;
use sqlx::SqlitePool;
use std::time::Duration;

#[sqlx::test]
async fn test_alias_lifecycle(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    let response = server
        .post("/url")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://example.com", "alias": "abc" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "OK", "alias": "abc" })
    );

    let response = server.get("/abc").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    let response = server
        .delete("/url/abc")
        .add_header("Authorization", common::auth_header())
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "OK" })
    );

    let response = server.get("/abc").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "Error", "error": "not found" })
    );
}

#[sqlx::test]
async fn test_generated_alias_redirects(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    let response = server
        .post("/url")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://www.rust-lang.org/learn" }))
        .await;
    response.assert_status_ok();

    let alias = response.json::<serde_json::Value>()["alias"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{}", alias)).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
}

#[sqlx::test]
async fn test_second_save_of_alias_conflicts(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    for (url, expected) in [("https://first.example", 200u16), ("https://second.example", 409u16)] {
        let response = server
            .post("/url")
            .add_header("Authorization", common::auth_header())
            .json(&json!({ "url": url, "alias": "same" }))
            .await;
        assert_eq!(response.status_code(), expected);
    }

    let response = server.get("/same").await;
    assert_eq!(response.header("location"), "https://first.example");
}

#[sqlx::test]
async fn test_write_routes_require_auth(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone(), false);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "abc" }))
        .await;
    assert_eq!(response.status_code(), 401);
    assert_eq!(
        response.header("www-authenticate"),
        "Basic realm=\"tinyalias\""
    );
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "Error", "error": "unauthorized" })
    );

    let response = server.delete("/url/abc").await;
    assert_eq!(response.status_code(), 401);

    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_wrong_credentials_rejected(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, "wrong"),
        )
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(response.status_code(), 401);

    let response = server
        .post("/url")
        .add_header("Authorization", "Bearer some-token")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[sqlx::test]
async fn test_redirect_is_public(pool: SqlitePool) {
    common::create_test_url(&pool, "pub", "https://example.com/public").await;
    let server = common::create_test_server(pool, false);

    let response = server.get("/pub").await;

    assert_eq!(response.status_code(), 302);
}

#[sqlx::test]
async fn test_health_not_shadowed_by_alias(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}

#[sqlx::test]
async fn test_legacy_mode_reports_errors_as_ok(pool: SqlitePool) {
    common::create_test_url(&pool, "taken", "https://example.com").await;
    let server = common::create_test_server(pool, true);

    let response = server.get("/missing").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "Error", "error": "not found" })
    );

    let response = server
        .post("/url")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "not a url" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "field URL is not a valid URL"
    );

    let response = server
        .post("/url")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://example.com", "alias": "taken" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "alias already exists"
    );
}

#[sqlx::test]
async fn test_legacy_mode_keeps_auth_and_redirect_status(pool: SqlitePool) {
    common::create_test_url(&pool, "abc", "https://example.com").await;
    let server = common::create_test_server(pool, true);

    let response = server.delete("/url/abc").await;
    assert_eq!(response.status_code(), 401);

    let response = server.get("/abc").await;
    assert_eq!(response.status_code(), 302);
}

#[sqlx::test]
async fn test_request_id_is_assigned(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    let response = server.get("/health").await;

    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());
}

#[sqlx::test]
async fn test_request_id_is_propagated(pool: SqlitePool) {
    let server = common::create_test_server(pool, false);

    let response = server
        .get("/missing")
        .add_header("x-request-id", "trace-me-123")
        .await;

    assert_eq!(response.header("x-request-id"), "trace-me-123");
}

#[sqlx::test]
async fn test_trailing_slashes_are_trimmed(pool: SqlitePool) {
    common::create_test_url(&pool, "abc", "https://example.com").await;
    let server = common::create_app_server(pool.clone(), common::REQUEST_TIMEOUT);

    let response = server.get("/abc/").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    let response = server.get("/health/").await;
    response.assert_status_ok();

    let response = server
        .delete("/url/abc/")
        .add_header("Authorization", common::auth_header())
        .await;
    response.assert_status_ok();
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_slow_request_times_out(pool: SqlitePool) {
    let server = common::create_app_server(pool.clone(), Duration::from_millis(200));
    let mut lock = common::lock_for_writes(&pool).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://example.com", "alias": "slow" }))
        .await;

    assert_eq!(response.status_code(), 408);

    sqlx::query("ROLLBACK").execute(&mut *lock).await.unwrap();
}
