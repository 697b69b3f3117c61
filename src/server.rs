//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, service wiring and the Axum server lifecycle.

use crate::application::services::{AuthService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteUrlRepository, sqlite_pool};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (with retry)
/// - Schema migrations
/// - Alias generator seeded from OS entropy
/// - Basic auth service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The system random number generator is unavailable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = sqlite_pool::connect(&config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlite_pool::migrate(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let repository = Arc::new(SqliteUrlRepository::new(pool.clone(), config.query_timeout()));
    let generator = Arc::new(
        RandomAliasGenerator::from_os_entropy().context("Failed to seed alias generator")?,
    );
    let url_service = Arc::new(UrlService::new(repository, generator));

    let auth_service = Arc::new(
        AuthService::new(&config.auth_user, &config.auth_password)
            .context("Failed to initialize auth service")?,
    );

    let state = AppState::new(url_service, auth_service);

    let app = app_router(state, config.legacy_error_status, config.request_timeout());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
