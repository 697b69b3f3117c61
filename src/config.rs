//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded by `main` via `dotenvy`).
//!
//! ## Database
//!
//! ```bash
//! export DATABASE_URL="sqlite://storage/tinyalias.db?mode=rwc"
//! # or just the file path:
//! export DATABASE_PATH="storage/tinyalias.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DATABASE_PATH`.
//!
//! ## Required Variables
//!
//! - `AUTH_USER`, `AUTH_PASSWORD` - Basic auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LEGACY_ERROR_STATUS` - Report workflow errors as `200 OK` (default: `false`)
//! - `HTTP_TIMEOUT` - Upper bound for handling one request in seconds (default: 4)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - SQLite busy timeout in seconds (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `DB_IDLE_TIMEOUT` - Idle connection lifetime in seconds (default: 600)
//! - `DB_QUERY_TIMEOUT_MS` - Per-query timeout in milliseconds (default: 3000)
//! - `DB_CONNECT_RETRIES` - Startup connection retries (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::PoolSettings;

/// Default SQLite file when neither `DATABASE_URL` nor `DATABASE_PATH` is set.
pub const DEFAULT_DATABASE_PATH: &str = "storage/tinyalias.db";

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub auth_user: String,
    pub auth_password: String,
    /// When true, workflow errors are sent with status `200 OK`.
    /// Authentication failures stay `401`.
    pub legacy_error_status: bool,
    /// Seconds before a request is answered with `408 Request Timeout`
    /// (`HTTP_TIMEOUT`, default: 4).
    pub http_timeout: u64,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Seconds a connection waits for a locked database (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Upper bound for a single store call in milliseconds
    /// (`DB_QUERY_TIMEOUT_MS`, default: 3000).
    pub db_query_timeout_ms: u64,
    /// Connection attempts after the first one fails (`DB_CONNECT_RETRIES`, default: 5).
    pub db_connect_retries: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or a numeric variable does
    /// not parse.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let auth_user = env::var("AUTH_USER").context("AUTH_USER must be set")?;
        let auth_password = env::var("AUTH_PASSWORD").context("AUTH_PASSWORD must be set")?;

        let legacy_error_status = env_flag("LEGACY_ERROR_STATUS");

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            auth_user,
            auth_password,
            legacy_error_status,
            http_timeout: env_parse("HTTP_TIMEOUT", 4)?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 5)?,
            db_busy_timeout: env_parse("DB_BUSY_TIMEOUT", 5)?,
            db_connect_timeout: env_parse("DB_CONNECT_TIMEOUT", 30)?,
            db_idle_timeout: env_parse("DB_IDLE_TIMEOUT", 600)?,
            db_query_timeout_ms: env_parse("DB_QUERY_TIMEOUT_MS", 3000)?,
            db_connect_retries: env_parse("DB_CONNECT_RETRIES", 5)?,
        })
    }

    /// Loads database URL with fallback to a file path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Built from `DATABASE_PATH` (default [`DEFAULT_DATABASE_PATH`])
    pub fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        format!("sqlite://{}?mode=rwc", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - credentials are empty
    /// - a pool setting or the request timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.auth_user.is_empty() {
            anyhow::bail!("AUTH_USER must not be empty");
        }
        if self.auth_password.is_empty() {
            anyhow::bail!("AUTH_PASSWORD must not be empty");
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_query_timeout_ms == 0 {
            anyhow::bail!("DB_QUERY_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Connection settings for [`crate::infrastructure::persistence::sqlite_pool::connect`].
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            database_url: self.database_url.clone(),
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
            acquire_timeout: Duration::from_secs(self.db_connect_timeout),
            idle_timeout: Duration::from_secs(self.db_idle_timeout),
            connect_retries: self.db_connect_retries,
        }
    }

    /// Upper bound for a single store call.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.db_query_timeout_ms)
    }

    /// Upper bound for handling one HTTP request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Auth user: {}", self.auth_user);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Error status: {}",
            if self.legacy_error_status {
                "legacy (200)"
            } else {
                "strict"
            }
        );
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!(
            "  Pool: {} connections, busy timeout {}s, query timeout {}ms",
            self.db_max_connections,
            self.db_busy_timeout,
            self.db_query_timeout_ms
        );
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("auth_user", &self.auth_user)
            .field("auth_password", &"***")
            .field("legacy_error_status", &self.legacy_error_status)
            .field("http_timeout", &self.http_timeout)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_busy_timeout", &self.db_busy_timeout)
            .field("db_connect_timeout", &self.db_connect_timeout)
            .field("db_idle_timeout", &self.db_idle_timeout)
            .field("db_query_timeout_ms", &self.db_query_timeout_ms)
            .field("db_connect_retries", &self.db_connect_retries)
            .finish()
    }
}

/// Reads `true`/`1` (any case) as set; anything else, or absence, as unset.
fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Parses a variable, falling back to `default` when it is absent.
fn env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
