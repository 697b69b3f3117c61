#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tinyalias::application::services::{AuthService, UrlService};
use tinyalias::infrastructure::persistence::SqliteUrlRepository;
use tinyalias::routes::{app_router, build_router};
use tinyalias::state::AppState;
use tinyalias::utils::alias_generator::RandomAliasGenerator;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "s3cret";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(pool, Duration::from_secs(5)));
    let generator = Arc::new(RandomAliasGenerator::from_os_entropy().unwrap());
    let url_service = Arc::new(UrlService::new(repository, generator));
    let auth_service = Arc::new(AuthService::with_key([42u8; 32], TEST_USER, TEST_PASSWORD));

    AppState::new(url_service, auth_service)
}

/// Full application router, as served in production minus path normalization.
pub fn create_test_server(pool: SqlitePool, legacy_error_status: bool) -> TestServer {
    let app = build_router(create_test_state(pool), legacy_error_status, REQUEST_TIMEOUT);

    TestServer::new(app).unwrap()
}

/// The service exactly as `server::run` serves it.
pub fn create_app_server(pool: SqlitePool, request_timeout: Duration) -> TestServer {
    let app = app_router(create_test_state(pool), false, request_timeout);

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Holds the database write lock until the returned connection is dropped
/// or rolled back.
pub async fn lock_for_writes(pool: &SqlitePool) -> sqlx::pool::PoolConnection<sqlx::Sqlite> {
    let mut conn = pool.acquire().await.unwrap();
    sqlx::query("BEGIN IMMEDIATE")
        .execute(&mut *conn)
        .await
        .unwrap();
    conn
}

pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

pub fn auth_header() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO urls (alias, url, created_at) VALUES (?, ?, ?)")
        .bind(alias)
        .bind(url)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
